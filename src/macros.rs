// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() is an empty String
    () => {
        ::std::string::String::new()
    };
    // s!(x) for anything String: From<x>
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // join!(a, b, ...): String from `a`, then push_str each &str after it
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_concatenates_in_order() {
        let dir = "out";
        assert_eq!(join!(dir, "/", "offers", ".csv"), "out/offers.csv");
        assert_eq!(s!(), "");
        assert_eq!(s!("x"), "x");
    }
}
