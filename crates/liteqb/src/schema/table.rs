//! CREATE TABLE builder with column and constraint bookkeeping.

use std::fmt;
use std::str::FromStr;

use crate::builder::ConflictStrategy;
use crate::error::{QbError, QbResult};
use crate::ident;
use crate::value::Value;

/// SQLite storage classes accepted in column declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Text,
    Integer,
    Real,
    Blob,
    Null,
    Timestamp,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Text => "TEXT",
            DataType::Integer => "INTEGER",
            DataType::Real => "REAL",
            DataType::Blob => "BLOB",
            DataType::Null => "NULL",
            DataType::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TEXT" => Ok(DataType::Text),
            "INTEGER" => Ok(DataType::Integer),
            "REAL" => Ok(DataType::Real),
            "BLOB" => Ok(DataType::Blob),
            "NULL" => Ok(DataType::Null),
            "TIMESTAMP" => Ok(DataType::Timestamp),
            _ => Err(QbError::type_error(format!("Unknown data type: {s}"))),
        }
    }
}

/// A column default.
///
/// Keyword defaults render bare; literal values render as quoted SQL
/// literals.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Value(Value),
    CurrentTimestamp,
    Null,
}

impl DefaultValue {
    fn render(&self) -> String {
        match self {
            DefaultValue::Value(v) => v.to_sql_literal(),
            DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
            DefaultValue::Null => "NULL".to_string(),
        }
    }

    /// Whether this default is admissible for a column declared as
    /// `data_type`: INTEGER takes whole numbers, TEXT and TIMESTAMP take
    /// text, REAL takes floating point, BLOB takes bytes or text, NULL
    /// takes only absence.
    fn compatible_with(&self, data_type: DataType) -> bool {
        match self {
            DefaultValue::Null => true,
            DefaultValue::CurrentTimestamp => {
                matches!(data_type, DataType::Timestamp | DataType::Text)
            }
            DefaultValue::Value(v) => match data_type {
                DataType::Integer => matches!(v, Value::Integer(_)),
                DataType::Text | DataType::Timestamp => matches!(v, Value::Text(_)),
                DataType::Real => matches!(v, Value::Real(_)),
                DataType::Blob => matches!(v, Value::Blob(_) | Value::Text(_)),
                DataType::Null => matches!(v, Value::Null),
            },
        }
    }
}

/// One column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub allow_nulls: bool,
    pub default: Option<DefaultValue>,
}

impl ColumnDef {
    fn render(&self) -> String {
        let mut out = format!("{} {}", self.name, self.data_type);
        if !self.allow_nulls {
            out.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            out.push_str(" DEFAULT ");
            out.push_str(&default.render());
        }
        out
    }
}

/// Per-call options for [`TableCreator::add_column_opts`].
#[derive(Debug, Clone)]
pub struct ColumnOptions {
    pub allow_nulls: bool,
    pub default: Option<DefaultValue>,
    /// Replace an existing column of the same name instead of failing.
    pub replace: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            allow_nulls: true,
            default: None,
            replace: false,
        }
    }
}

/// Construction-time options for [`TableCreator`]; everything on by default.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub primary: bool,
    pub created_at: bool,
    pub updated_at: bool,
    pub deleted_at: bool,
    pub meta_columns: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            primary: true,
            created_at: true,
            updated_at: true,
            deleted_at: true,
            meta_columns: true,
        }
    }
}

/// A recorded foreign-key reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub column: String,
    pub ref_table: String,
    pub ref_column: String,
}

/// CREATE TABLE builder.
///
/// By default a new table carries an integer `id` primary key and
/// `created_at` / `updated_at` / `deleted_at` timestamp columns; disable
/// them per instance through [`TableOptions`].
#[derive(Debug, Clone)]
pub struct TableCreator {
    table_name: String,
    columns: Vec<ColumnDef>,
    primary_key: Option<String>,
    unique_constraints: Vec<String>,
    foreign_keys: Vec<ForeignKey>,
    temporary: bool,
    if_not_exists: bool,
    default_conflict: ConflictStrategy,
}

impl TableCreator {
    /// Create a builder for `name` with the default meta columns.
    pub fn new(name: &str) -> QbResult<Self> {
        Self::with_options(name, TableOptions::default())
    }

    /// Create a builder for `name` with explicit options.
    pub fn with_options(name: &str, options: TableOptions) -> QbResult<Self> {
        ident::validate_identifier(name)?;
        let mut creator = Self {
            table_name: name.to_string(),
            columns: Vec::new(),
            primary_key: None,
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
            temporary: false,
            if_not_exists: false,
            default_conflict: ConflictStrategy::Fail,
        };

        if options.meta_columns {
            if options.primary {
                creator.add_primary_column("id", DataType::Integer)?;
            }
            if options.created_at {
                creator.add_column_opts(
                    "created_at",
                    DataType::Timestamp,
                    ColumnOptions {
                        default: Some(DefaultValue::CurrentTimestamp),
                        ..Default::default()
                    },
                )?;
            }
            if options.updated_at {
                creator.add_column_opts(
                    "updated_at",
                    DataType::Timestamp,
                    ColumnOptions {
                        default: Some(DefaultValue::CurrentTimestamp),
                        ..Default::default()
                    },
                )?;
            }
            if options.deleted_at {
                creator.add_column_opts(
                    "deleted_at",
                    DataType::Timestamp,
                    ColumnOptions {
                        default: Some(DefaultValue::Null),
                        ..Default::default()
                    },
                )?;
            }
        }
        Ok(creator)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    pub fn unique_constraints(&self) -> &[String] {
        &self.unique_constraints
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    /// The conflict policy recorded for this table. Bookkeeping only; it is
    /// not rendered into the CREATE statement.
    pub fn default_conflict(&self) -> ConflictStrategy {
        self.default_conflict
    }

    /// Add a nullable column with no default.
    pub fn add_column(&mut self, name: &str, data_type: DataType) -> QbResult<&mut Self> {
        self.add_column_opts(name, data_type, ColumnOptions::default())
    }

    /// Add a column with explicit options.
    ///
    /// Fails on a duplicate name unless `replace` is set, on an identifier
    /// that misses the grammar, on a case-insensitive reserved-keyword
    /// collision, or on a default incompatible with the declared type.
    pub fn add_column_opts(
        &mut self,
        name: &str,
        data_type: DataType,
        options: ColumnOptions,
    ) -> QbResult<&mut Self> {
        if self.column(name).is_some() && !options.replace {
            return Err(QbError::constraint(format!(
                "Column already exists: {name}"
            )));
        }
        ident::validate_column_name(name)?;
        if let Some(default) = &options.default {
            if !default.compatible_with(data_type) {
                let got = match default {
                    DefaultValue::Value(v) => v.type_name(),
                    DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP",
                    DefaultValue::Null => "NULL",
                };
                return Err(QbError::type_error(format!(
                    "Default value of type {got} does not match data type {data_type} for column {name}"
                )));
            }
        }

        tracing::debug!(target: "liteqb.sql", column = name, data_type = %data_type, "added column");
        let def = ColumnDef {
            name: name.to_string(),
            data_type,
            allow_nulls: options.allow_nulls,
            default: options.default,
        };
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = def,
            None => self.columns.push(def),
        }
        Ok(self)
    }

    /// Add a NOT NULL column and make it the primary key.
    pub fn add_primary_column(&mut self, name: &str, data_type: DataType) -> QbResult<&mut Self> {
        self.add_column_opts(
            name,
            data_type,
            ColumnOptions {
                allow_nulls: false,
                ..Default::default()
            },
        )?;
        self.set_primary_key(name)
    }

    /// Record `column` as the primary key; it must already be defined.
    pub fn set_primary_key(&mut self, column: &str) -> QbResult<&mut Self> {
        if self.column(column).is_none() {
            return Err(QbError::constraint(format!(
                "Primary key column not found in table columns: {column}"
            )));
        }
        self.primary_key = Some(column.to_string());
        Ok(self)
    }

    /// Record a UNIQUE constraint on `column`; it must already be defined.
    pub fn add_unique_constraint(&mut self, column: &str) -> QbResult<&mut Self> {
        if self.column(column).is_none() {
            return Err(QbError::constraint(format!(
                "Unique constraint column not found in table columns: {column}"
            )));
        }
        if !self.unique_constraints.iter().any(|c| c == column) {
            self.unique_constraints.push(column.to_string());
        }
        Ok(self)
    }

    /// Record a foreign key from `column` to `ref_table.ref_column`.
    ///
    /// The local column must already be defined; the referenced table and
    /// column only pass the identifier grammar. Whether they exist in some
    /// other schema is the caller's business.
    pub fn add_foreign_key(
        &mut self,
        column: &str,
        ref_table: &str,
        ref_column: &str,
    ) -> QbResult<&mut Self> {
        if self.column(column).is_none() {
            return Err(QbError::constraint(format!(
                "Foreign key column not found in table columns: {column}"
            )));
        }
        ident::validate_identifier(ref_table)?;
        ident::validate_identifier(ref_column)?;
        self.foreign_keys.push(ForeignKey {
            column: column.to_string(),
            ref_table: ref_table.to_string(),
            ref_column: ref_column.to_string(),
        });
        Ok(self)
    }

    /// Mark the table TEMPORARY.
    pub fn temporary(&mut self, temporary: bool) -> &mut Self {
        self.temporary = temporary;
        self
    }

    /// Emit `IF NOT EXISTS`.
    pub fn if_not_exists(&mut self, if_not_exists: bool) -> &mut Self {
        self.if_not_exists = if_not_exists;
        self
    }

    /// Record the table's default conflict policy.
    pub fn on_conflict(&mut self, strategy: ConflictStrategy) -> &mut Self {
        self.default_conflict = strategy;
        self
    }

    /// Render the CREATE TABLE statement.
    pub fn build(&self) -> QbResult<String> {
        if self.columns.is_empty() {
            return Err(QbError::state("No columns defined for the table"));
        }

        let mut defs: Vec<String> = self.columns.iter().map(ColumnDef::render).collect();
        if let Some(pk) = &self.primary_key {
            defs.push(format!("PRIMARY KEY ({pk})"));
        }
        for unique in &self.unique_constraints {
            defs.push(format!("UNIQUE ({unique})"));
        }
        for fk in &self.foreign_keys {
            defs.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                fk.column, fk.ref_table, fk.ref_column
            ));
        }

        let mut head = String::from("CREATE");
        if self.temporary {
            head.push_str(" TEMPORARY");
        }
        head.push_str(" TABLE");
        if self.if_not_exists {
            head.push_str(" IF NOT EXISTS");
        }

        Ok(format!(
            "{} {} ({});",
            head,
            self.table_name,
            defs.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(name: &str) -> TableCreator {
        TableCreator::with_options(
            name,
            TableOptions {
                meta_columns: false,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn defaults_add_meta_columns() {
        let t = TableCreator::new("widgets").unwrap();

        let id = t.column("id").unwrap();
        assert_eq!(id.data_type, DataType::Integer);
        assert!(!id.allow_nulls);
        assert_eq!(t.primary_key(), Some("id"));

        let created = t.column("created_at").unwrap();
        assert_eq!(created.data_type, DataType::Timestamp);
        assert!(created.allow_nulls);
        assert_eq!(created.default, Some(DefaultValue::CurrentTimestamp));

        let updated = t.column("updated_at").unwrap();
        assert_eq!(updated.default, Some(DefaultValue::CurrentTimestamp));

        let deleted = t.column("deleted_at").unwrap();
        assert_eq!(deleted.default, Some(DefaultValue::Null));
    }

    #[test]
    fn default_table_renders() {
        let t = TableCreator::new("widgets").unwrap();
        assert_eq!(
            t.build().unwrap(),
            "CREATE TABLE widgets (\
             id INTEGER NOT NULL, \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, \
             updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, \
             deleted_at TIMESTAMP DEFAULT NULL, \
             PRIMARY KEY (id));"
        );
    }

    #[test]
    fn duplicate_column_needs_replace() {
        let mut t = TableCreator::new("widgets").unwrap();
        assert!(t.add_column("id", DataType::Integer).is_err());
        assert!(t
            .add_column_opts(
                "id",
                DataType::Integer,
                ColumnOptions {
                    replace: true,
                    allow_nulls: false,
                    ..Default::default()
                },
            )
            .is_ok());
        // Replacing keeps the column's original position.
        assert_eq!(t.columns()[0].name, "id");
    }

    #[test]
    fn rejects_invalid_table_name() {
        assert!(TableCreator::new("bad name!").is_err());
        assert!(TableCreator::new("1widgets").is_err());
    }

    #[test]
    fn rejects_reserved_column_name() {
        let mut t = bare("widgets");
        assert!(matches!(
            t.add_column("select", DataType::Text),
            Err(QbError::ReservedKeyword(_))
        ));
    }

    #[test]
    fn rejects_mismatched_default() {
        let mut t = bare("widgets");
        let err = t.add_column_opts(
            "count",
            DataType::Integer,
            ColumnOptions {
                default: Some(DefaultValue::Value(Value::Text("nope".to_string()))),
                ..Default::default()
            },
        );
        assert!(matches!(err, Err(QbError::Type(_))));
    }

    #[test]
    fn blob_default_accepts_text() {
        let mut t = bare("widgets");
        assert!(t
            .add_column_opts(
                "payload",
                DataType::Blob,
                ColumnOptions {
                    default: Some(DefaultValue::Value(Value::Text("seed".to_string()))),
                    ..Default::default()
                },
            )
            .is_ok());
    }

    #[test]
    fn text_default_renders_quoted() {
        let mut t = bare("widgets");
        t.add_column_opts(
            "status",
            DataType::Text,
            ColumnOptions {
                allow_nulls: false,
                default: Some(DefaultValue::Value(Value::Text("new".to_string()))),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            t.build().unwrap(),
            "CREATE TABLE widgets (status TEXT NOT NULL DEFAULT 'new');"
        );
    }

    #[test]
    fn constraints_require_existing_columns() {
        let mut t = bare("widgets");
        t.add_column("owner_id", DataType::Integer).unwrap();

        assert!(t.set_primary_key("missing").is_err());
        assert!(t.add_unique_constraint("missing").is_err());
        assert!(t.add_foreign_key("missing", "users", "id").is_err());

        assert!(t.set_primary_key("owner_id").is_ok());
        assert!(t.add_unique_constraint("owner_id").is_ok());
        assert!(t.add_foreign_key("owner_id", "users", "id").is_ok());
    }

    #[test]
    fn constraints_render_in_order() {
        let mut t = bare("orders");
        t.add_column("user_id", DataType::Integer).unwrap();
        t.add_column("sku", DataType::Text).unwrap();
        t.set_primary_key("user_id").unwrap();
        t.add_unique_constraint("sku").unwrap();
        t.add_foreign_key("user_id", "users", "id").unwrap();

        assert_eq!(
            t.build().unwrap(),
            "CREATE TABLE orders (\
             user_id INTEGER, sku TEXT, \
             PRIMARY KEY (user_id), \
             UNIQUE (sku), \
             FOREIGN KEY (user_id) REFERENCES users (id));"
        );
    }

    #[test]
    fn temporary_and_if_not_exists() {
        let mut t = bare("scratch");
        t.add_column("v", DataType::Text).unwrap();
        t.temporary(true).if_not_exists(true);
        assert_eq!(
            t.build().unwrap(),
            "CREATE TEMPORARY TABLE IF NOT EXISTS scratch (v TEXT);"
        );
    }

    #[test]
    fn zero_columns_is_a_state_error() {
        let t = bare("widgets");
        assert!(matches!(t.build(), Err(QbError::State(_))));
    }

    #[test]
    fn conflict_policy_is_bookkeeping_only() {
        let mut t = bare("widgets");
        t.add_column("v", DataType::Text).unwrap();
        t.on_conflict(ConflictStrategy::Replace);
        assert_eq!(t.default_conflict(), ConflictStrategy::Replace);
        assert!(!t.build().unwrap().contains("REPLACE"));
    }

    #[test]
    fn data_type_parses() {
        assert_eq!("timestamp".parse::<DataType>().unwrap(), DataType::Timestamp);
        assert!("VARCHAR".parse::<DataType>().is_err());
    }
}
