#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! lit {
    ($text:expr) => {
        $crate::Rule::literal($text)
    };
}

#[macro_export]
macro_rules! pat {
    ($source:expr) => {
        $crate::Rule::pattern($source)
    };
}

#[macro_export]
macro_rules! sym {
    ($name:expr) => {
        $crate::Rule::named($name)
    };
}

#[macro_export]
macro_rules! aux_sym {
    ($name:expr) => {
        $crate::Rule::auxiliary($name)
    };
}

#[macro_export]
macro_rules! seq {
    ($($element:expr),* $(,)?) => {
        $crate::Rule::seq(vec![$($element),*])
    };
}

#[macro_export]
macro_rules! choice {
    ($($alternative:expr),* $(,)?) => {
        $crate::Rule::choice(vec![$($alternative),*])
    };
}

#[macro_export]
macro_rules! rep {
    ($content:expr) => {
        $crate::Rule::repeat($content)
    };
}
