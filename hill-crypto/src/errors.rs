#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    /// A pivot column had no invertible entry at or below the pivot row, so
    /// the candidate has no inverse mod 26. Routine during synthesis; the
    /// retry loop absorbs it.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
    #[error("InvalidOrder: {0}")]
    InvalidOrder(String),
    /// The synthesis loop hit its attempt cap without finding an invertible
    /// candidate.
    #[error("SearchExhausted: {0}")]
    SearchExhausted(String),

    #[error("MalformedKeyFile: {0}")]
    MalformedKeyFile(String),
    #[error("Key file I/O: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
