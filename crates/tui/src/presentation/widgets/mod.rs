pub mod label_value;
