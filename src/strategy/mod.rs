use std::sync::Arc;

use crate::transform::to_snake_case;

/// A namer maps an input identifier to its normalized output name.
pub type Namer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Naming context a transform request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Database,
    Table,
    Column,
}

/// Per-property naming functions. Any slot left empty falls back to the
/// `default` slot at dispatch time; a strategy registered without a default
/// gets the built-in snake_case transform substituted.
#[derive(Clone, Default)]
pub struct NamingStrategy {
    pub default: Option<Namer>,
    pub database: Option<Namer>,
    pub table: Option<Namer>,
    pub column: Option<Namer>,
}

impl NamingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_namer(mut self, namer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.default = Some(Arc::new(namer));
        self
    }

    pub fn database_namer(
        mut self,
        namer: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.database = Some(Arc::new(namer));
        self
    }

    pub fn table_namer(mut self, namer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.table = Some(Arc::new(namer));
        self
    }

    pub fn column_namer(mut self, namer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.column = Some(Arc::new(namer));
        self
    }
}

/// A finalized strategy: the default slot is always present.
#[derive(Clone)]
pub(crate) struct ActiveStrategy {
    default: Namer,
    database: Option<Namer>,
    table: Option<Namer>,
    column: Option<Namer>,
}

impl ActiveStrategy {
    /// Resolve the namer for a property, falling back to the default slot.
    pub(crate) fn namer(&self, property: Property) -> &Namer {
        let slot = match property {
            Property::Database => &self.database,
            Property::Table => &self.table,
            Property::Column => &self.column,
        };
        slot.as_ref().unwrap_or(&self.default)
    }
}

impl From<NamingStrategy> for ActiveStrategy {
    fn from(strategy: NamingStrategy) -> Self {
        Self {
            default: strategy.default.unwrap_or_else(|| Arc::new(to_snake_case)),
            database: strategy.database,
            table: strategy.table,
            column: strategy.column,
        }
    }
}
