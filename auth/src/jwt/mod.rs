pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::Token;
pub use codec::TokenCodec;
pub use errors::TokenError;
