//! Macros for error creation and handling

/// Create an [`Error`](crate::Error) of the named kind with a formatted context
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::error::Error::$kind()
    };
    ($kind:ident, $msg:expr) => {
        $crate::error::Error::$kind().context($msg)
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::$kind().context(format!($fmt, $($arg)*))
    };
}

/// Return early with an error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an error unless the condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
