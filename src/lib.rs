pub mod v1;

pub mod prelude {
    pub use crate::v1::config::*;
    pub use crate::v1::diagnostics::*;
    pub use crate::v1::envelope::*;
    pub use crate::v1::errors::*;
    pub use crate::v1::handlers::*;
    pub use crate::v1::invoker::*;
    pub use crate::v1::request::*;
}
