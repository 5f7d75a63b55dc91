mod common;
mod session;
mod streams;
