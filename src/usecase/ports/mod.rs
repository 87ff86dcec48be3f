pub mod sheet_reader;
