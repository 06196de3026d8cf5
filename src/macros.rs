#[cfg(feature = "tracing")]
macro_rules! sctrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_to_section", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sctrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! scdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_to_section", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! scwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_to_section", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scwarn {
    ($($tt:tt)*) => {};
}
