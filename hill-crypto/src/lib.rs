#![allow(non_snake_case)]

pub mod codec;
pub mod errors;
pub mod keypair;
pub mod ring;

pub use errors::HillCryptoError;
pub use keypair::keys::KeyPair;
