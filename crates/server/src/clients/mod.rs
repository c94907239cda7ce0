pub mod livechess;
