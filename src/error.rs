use std::fmt;

pub type VersorResult<T> = Result<T, VersorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersorError {
    ZeroNormInverse,
}
impl fmt::Display for VersorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersorError::ZeroNormInverse => {
                write!(f, "
                    \rCannot invert a quaternion with zero norm",
                )
            }
        }
    }
}
