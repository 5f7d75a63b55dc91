pub mod ansi;
pub mod ascii;
pub mod emphasis;
