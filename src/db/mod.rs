pub mod executor;
pub mod pool;
pub mod queries;

pub use executor::QueryExecutor;
pub use pool::DbPool;
