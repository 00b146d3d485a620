use crate::error::TnccError;

pub fn get_exit_code(error: &TnccError) -> i32 {
    match error {
        TnccError::InvalidHost { .. } | TnccError::ValidationError(_) => 2,

        TnccError::ClassNotFound { .. } => 4,

        TnccError::InvalidArchive { .. } | TnccError::Zip(_) => 5,

        TnccError::SecurityError(_) => 13,

        TnccError::Http(_) | TnccError::Download(_) => 20,

        TnccError::JavaNotFound { .. } => 127, // Standard "command not found" exit code

        _ => 1,
    }
}
