pub mod edupath;
