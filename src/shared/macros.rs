/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a start-up result or logs the error with some context and exits.
#[macro_export]
macro_rules! exit_on_err {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
