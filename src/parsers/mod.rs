pub mod text;
pub mod traits;

pub mod prelude {
    pub use super::text::prelude::*;
    pub use super::traits::Parser;
}
