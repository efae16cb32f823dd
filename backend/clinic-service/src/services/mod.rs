/// Business logic layer
///
/// Each mutating call runs in a single transaction that is committed on
/// success and rolled back before the error is returned.
pub mod blog;
pub mod patients;

pub use blog::BlogService;
pub use patients::PatientService;
