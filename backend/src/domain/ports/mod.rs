//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod counter_cache;
mod counter_store;
mod user_repository;
mod users_query;

pub use counter_cache::{CounterCache, CounterCacheError, FixtureCounterCache};
#[cfg(test)]
pub use counter_store::MockCounterStore;
pub use counter_store::CounterStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
