//! Binary key-file codec.
//!
//! A key file is a 4-byte little-endian signed integer giving the matrix
//! order `n`, followed by `n*n` 4-byte little-endian signed integers in
//! row-major order, each an element of Z/26Z.

use crate::errors::HillCryptoError;
use crate::ring::{ALPHABET_MODULUS, Matrix};

use std::fs;
use std::path::Path;

const ORDER_SIZE_BYTES: usize = std::mem::size_of::<i32>();
const ENTRY_SIZE_BYTES: usize = std::mem::size_of::<i32>();

/// Serializes a square key matrix into the binary key-file format.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is empty, not
/// square, or holds an entry outside `[0, 26)`.
pub fn serialize_key(matrix: &Matrix) -> Result<Vec<u8>, HillCryptoError> {
    let n = matrix.len();
    if n == 0 {
        return Err(HillCryptoError::DimensionMismatch(
            "Cannot serialize an empty key matrix".to_string(),
        ));
    }
    if n > i32::MAX as usize {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Key order {} does not fit the 4-byte order header",
            n
        )));
    }

    let modulus = ALPHABET_MODULUS as i64;
    let mut result = Vec::with_capacity(ORDER_SIZE_BYTES + n * n * ENTRY_SIZE_BYTES);
    result.extend_from_slice(&(n as i32).to_le_bytes());

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Key row {} has length {}, expected {}",
                i,
                row.len(),
                n
            )));
        }
        for &val in row {
            if !(0..modulus).contains(&val) {
                return Err(HillCryptoError::DimensionMismatch(format!(
                    "Key entry {} is outside [0, {})",
                    val, modulus
                )));
            }
            result.extend_from_slice(&(val as i32).to_le_bytes());
        }
    }
    Ok(result)
}

/// Deserializes a binary key file back into its matrix.
///
/// # Errors
///
/// Returns `HillCryptoError::MalformedKeyFile` if the data is too short for
/// the order header, the order is not positive, the payload length does not
/// match `n*n` entries, or an entry falls outside `[0, 26)`.
pub fn deserialize_key(data: &[u8]) -> Result<Matrix, HillCryptoError> {
    if data.len() < ORDER_SIZE_BYTES {
        return Err(HillCryptoError::MalformedKeyFile(
            "Key file too short to contain the matrix order".to_string(),
        ));
    }

    let order_bytes = data[0..ORDER_SIZE_BYTES].try_into().unwrap(); // Safe due to check above
    let order = i32::from_le_bytes(order_bytes);
    if order <= 0 {
        return Err(HillCryptoError::MalformedKeyFile(format!(
            "Matrix order must be positive, got {}",
            order
        )));
    }
    let n = order as usize;

    let expected_len = n
        .checked_mul(n)
        .and_then(|cells| cells.checked_mul(ENTRY_SIZE_BYTES))
        .ok_or_else(|| {
            HillCryptoError::MalformedKeyFile(format!("Matrix order {} overflows", n))
        })?;
    let body = &data[ORDER_SIZE_BYTES..];
    if body.len() != expected_len {
        return Err(HillCryptoError::MalformedKeyFile(format!(
            "Key file holds {} payload bytes, expected {} for order {}",
            body.len(),
            expected_len,
            n
        )));
    }

    let modulus = ALPHABET_MODULUS as i64;
    let mut matrix = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let start = (i * n + j) * ENTRY_SIZE_BYTES;
            let entry_bytes: [u8; ENTRY_SIZE_BYTES] =
                body[start..start + ENTRY_SIZE_BYTES].try_into().unwrap();
            let val = i32::from_le_bytes(entry_bytes) as i64;
            if !(0..modulus).contains(&val) {
                return Err(HillCryptoError::MalformedKeyFile(format!(
                    "Key entry {} at ({}, {}) is outside [0, {})",
                    val, i, j, modulus
                )));
            }
            row.push(val);
        }
        matrix.push(row);
    }

    Ok(matrix)
}

/// Writes a key matrix to a file in the binary key-file format.
///
/// # Errors
///
/// Propagates serialization failures and surfaces I/O failures as
/// `HillCryptoError::Persistence`.
pub fn write_key(path: impl AsRef<Path>, matrix: &Matrix) -> Result<(), HillCryptoError> {
    let bytes = serialize_key(matrix)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads a key matrix back from a binary key file.
pub fn read_key(path: impl AsRef<Path>) -> Result<Matrix, HillCryptoError> {
    let bytes = fs::read(path)?;
    deserialize_key(&bytes)
}
