use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStructureConfig {
    pub table_name: String,
    pub column_key: String,
    pub column_value: String
}
