//! Forward-only row cursors and their consumption helpers.
//!
//! Query layers hand out cursors rather than materialized collections. A
//! cursor is single-pass and owns an underlying resource that must be
//! released exactly once, no matter how consumption ends. The helpers in
//! [`CursorExt`] take the cursor by value and route it through an RAII
//! guard, so release happens on normal completion, on a `move_next`
//! failure, and on a transform failure alike.

use crate::error::{DataError, DataResult};

/// A forward-only, single-pass source of rows.
///
/// `move_next` yields the next row or `None` once the source is exhausted.
/// `close` releases the underlying resource; the consumption helpers call
/// it exactly once and swallow any release error so the original outcome
/// of the traversal is preserved.
pub trait RowCursor {
    type Row;

    /// Advances the cursor, returning the next row or `None` at the end.
    fn move_next(&mut self) -> DataResult<Option<Self::Row>>;

    /// Releases the underlying resource.
    fn close(&mut self) -> DataResult<()>;
}

/// Guard that closes the wrapped cursor when dropped.
///
/// Release errors are logged and swallowed so they never mask the result
/// of the traversal itself.
struct ReleaseOnDrop<C: RowCursor> {
    cursor: C,
}

impl<C: RowCursor> Drop for ReleaseOnDrop<C> {
    fn drop(&mut self) {
        if let Err(err) = self.cursor.close() {
            tracing::debug!("cursor release failed: {err}");
        }
    }
}

/// Consumption shapes for any [`RowCursor`].
///
/// All helpers consume the cursor: the source is exhausted (or abandoned)
/// and released by the time they return.
pub trait CursorExt: RowCursor + Sized {
    /// Applies `transform` to every row, in row order.
    fn map_rows<T, F>(self, mut transform: F) -> DataResult<Vec<T>>
    where
        F: FnMut(Self::Row) -> DataResult<T>,
    {
        let mut guard = ReleaseOnDrop { cursor: self };
        let mut out = Vec::new();
        while let Some(row) = guard.cursor.move_next()? {
            out.push(transform(row)?);
        }
        Ok(out)
    }

    /// Applies `transform` to the first row.
    ///
    /// Fails with [`DataError::EmptyResult`] when the cursor has no rows.
    fn first<T, F>(self, transform: F) -> DataResult<T>
    where
        F: FnOnce(Self::Row) -> DataResult<T>,
    {
        self.first_opt(transform)?.ok_or(DataError::EmptyResult)
    }

    /// Applies `transform` to the first row, or yields `None` on an empty
    /// cursor without failing.
    fn first_opt<T, F>(self, transform: F) -> DataResult<Option<T>>
    where
        F: FnOnce(Self::Row) -> DataResult<T>,
    {
        let mut guard = ReleaseOnDrop { cursor: self };
        match guard.cursor.move_next()? {
            Some(row) => Ok(Some(transform(row)?)),
            None => Ok(None),
        }
    }
}

impl<C: RowCursor + Sized> CursorExt for C {}

/// In-memory cursor over an owned collection of rows.
///
/// Backs [`crate::store`] queries and stands in for a database cursor in
/// tests. `close` is a no-op beyond marking the cursor spent.
pub struct VecCursor<R> {
    rows: std::vec::IntoIter<R>,
    closed: bool,
}

impl<R> VecCursor<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: rows.into_iter(),
            closed: false,
        }
    }
}

impl<R> RowCursor for VecCursor<R> {
    type Row = R;

    fn move_next(&mut self) -> DataResult<Option<R>> {
        if self.closed {
            return Err(DataError::Cursor("cursor already closed".into()));
        }
        Ok(self.rows.next())
    }

    fn close(&mut self) -> DataResult<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Cursor that records how often it was closed and can be told to
    /// fail on `move_next` or on `close`.
    struct TrackingCursor {
        rows: Vec<i32>,
        position: usize,
        closes: Rc<Cell<u32>>,
        fail_next: bool,
        fail_close: bool,
    }

    impl TrackingCursor {
        fn new(rows: Vec<i32>, closes: Rc<Cell<u32>>) -> Self {
            Self {
                rows,
                position: 0,
                closes,
                fail_next: false,
                fail_close: false,
            }
        }
    }

    impl RowCursor for TrackingCursor {
        type Row = i32;

        fn move_next(&mut self) -> DataResult<Option<i32>> {
            if self.fail_next {
                return Err(DataError::Cursor("simulated read failure".into()));
            }
            let row = self.rows.get(self.position).copied();
            self.position += 1;
            Ok(row)
        }

        fn close(&mut self) -> DataResult<()> {
            self.closes.set(self.closes.get() + 1);
            if self.fail_close {
                return Err(DataError::Cursor("simulated release failure".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn map_rows_transforms_in_order_and_releases_once() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![1, 2, 3], closes.clone());

        let doubled = cursor.map_rows(|row| Ok(row * 2)).unwrap();

        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn map_rows_on_empty_cursor_yields_empty_vec() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![], closes.clone());

        let out: Vec<i32> = cursor.map_rows(Ok).unwrap();

        assert!(out.is_empty());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn transform_error_still_releases_exactly_once() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![1, 2, 3], closes.clone());

        let result = cursor.map_rows(|row| {
            if row == 2 {
                Err(DataError::Mapping("bad row".into()))
            } else {
                Ok(row)
            }
        });

        assert!(matches!(result, Err(DataError::Mapping(_))));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn read_error_still_releases_exactly_once() {
        let closes = Rc::new(Cell::new(0));
        let mut cursor = TrackingCursor::new(vec![1], closes.clone());
        cursor.fail_next = true;

        let result = cursor.map_rows(Ok);

        assert!(matches!(result, Err(DataError::Cursor(_))));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn release_error_is_swallowed() {
        let closes = Rc::new(Cell::new(0));
        let mut cursor = TrackingCursor::new(vec![7], closes.clone());
        cursor.fail_close = true;

        let first = cursor.first(Ok).unwrap();

        assert_eq!(first, 7);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn first_fails_on_empty_cursor() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![], closes.clone());

        let result = cursor.first(Ok);

        assert!(matches!(result, Err(DataError::EmptyResult)));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn first_opt_yields_none_on_empty_cursor() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![], closes.clone());

        let result = cursor.first_opt(Ok).unwrap();

        assert_eq!(result, None);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn first_returns_only_the_first_row() {
        let closes = Rc::new(Cell::new(0));
        let cursor = TrackingCursor::new(vec![10, 20, 30], closes.clone());

        assert_eq!(cursor.first(Ok).unwrap(), 10);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn vec_cursor_rejects_reads_after_close() {
        let mut cursor = VecCursor::new(vec![1]);
        cursor.close().unwrap();
        assert!(matches!(cursor.move_next(), Err(DataError::Cursor(_))));
    }
}
