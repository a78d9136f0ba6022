//! Standard library.
//!
//! Every function here is registered through the same public builder API a
//! host application uses. Groups are returned as entries so callers can pick
//! the ones they want:
//!
//! ```
//! use bminus_eval::{std_lib, EnvironmentBuilder, Interpreter};
//!
//! let env = EnvironmentBuilder::new()
//!     .add_functions(std_lib::math()?)
//!     .build();
//! let interpreter = Interpreter::new(env);
//! assert!(interpreter.environment().contains("ADD"));
//! # Ok::<(), bminus_eval::SignatureError>(())
//! ```

mod control;
mod math;
mod text;

pub use control::control;
pub use math::math;
pub use text::text;

use crate::environment::EnvironmentBuilder;
use crate::signature::SignatureError;

/// A builder preloaded with every standard function.
pub fn builder() -> Result<EnvironmentBuilder, SignatureError> {
    Ok(EnvironmentBuilder::new()
        .add_functions(math()?)
        .add_functions(text()?)
        .add_functions(control()?))
}
