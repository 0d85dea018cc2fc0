// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand

    // s!() → String::new()
    () => {
        ::std::string::String::new()
    };
    // literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
