use crate::di::{DependenciesInject, DependenciesInjectDeps};
use shared::{
    abstract_trait::{generator::DynCardDetailsGenerator, hashing::DynHashing},
    config::{CardDetailsGenerator, ConnectionPool, Hashing},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let generator = Arc::new(CardDetailsGenerator::new()) as DynCardDetailsGenerator;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            generator,
        };

        let di_container = DependenciesInject::new(deps);

        Self { di_container }
    }
}
