/// Declares one `u16` constant per canonical status and the static table the
/// built-in registry is constructed from.
macro_rules! status_codes {
    ($($code:literal $name:ident $reason:literal;)+) => {
        $(
            #[doc = concat!(stringify!($code), " ", $reason)]
            pub const $name: u16 = $code;
        )+

        pub(crate) static ENTRIES: &[(u16, &str, &str)] = &[
            $(($code, stringify!($name), $reason),)+
        ];
    };
}

/// Declares alias constants (alias name => canonical name) and the alias table.
///
/// The constant refers to the canonical constant, so an alias naming a status
/// that does not exist fails to compile before the registry ever validates it.
macro_rules! status_aliases {
    ($($alias:ident => $canonical:ident;)+) => {
        $(
            #[doc = concat!("Alias of [`", stringify!($canonical), "`].")]
            #[allow(non_upper_case_globals)]
            pub const $alias: u16 = $canonical;
        )+

        pub(crate) static ALIASES: &[(&str, &str)] = &[
            $((stringify!($alias), stringify!($canonical)),)+
        ];
    };
}
