//! Schema introspection over the entity metadata.
//!
//! Builds a plain description of a table (columns, foreign keys and
//! many-to-many links) from the `ColumnDef` and `RelationDef` values generated
//! by the sea-orm derives. The `describe` command prints it and the structural
//! tests assert against it.

use std::fmt;

use sea_orm::{
    sea_query::{ColumnType, ForeignKeyAction, StringLen, TableRef},
    ColumnTrait, EntityName, EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn, Related,
    RelationTrait,
};

use crate::model::app::AppModel;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// Primary keys count as unique.
    pub unique: bool,
    pub primary_key: bool,
}

impl FieldSchema {
    /// Maximum length of a bounded string column.
    pub fn max_length(&self) -> Option<u32> {
        match self.column_type {
            ColumnType::String(StringLen::N(len)) | ColumnType::Char(Some(len)) => Some(len),
            _ => None,
        }
    }
}

/// Referential action taken when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
    NoAction,
}

impl OnDelete {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::NoAction => "NO ACTION",
        }
    }
}

impl From<&ForeignKeyAction> for OnDelete {
    fn from(action: &ForeignKeyAction) -> Self {
        match action {
            ForeignKeyAction::Restrict => Self::Restrict,
            ForeignKeyAction::Cascade => Self::Cascade,
            ForeignKeyAction::SetNull => Self::SetNull,
            ForeignKeyAction::SetDefault => Self::SetDefault,
            _ => Self::NoAction,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeySchema {
    /// Name of the relation variant on the entity, e.g. `Category`.
    pub relation: String,
    pub to_table: String,
    pub on_delete: Option<OnDelete>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManyToManySchema {
    pub name: String,
    pub to_table: String,
    pub through: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub table: String,
    pub app_label: &'static str,
    pub fields: Vec<FieldSchema>,
    pub foreign_keys: Vec<ForeignKeySchema>,
    pub many_to_many: Vec<ManyToManySchema>,
}

impl ModelSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn foreign_key(&self, relation: &str) -> Option<&ForeignKeySchema> {
        self.foreign_keys.iter().find(|fk| fk.relation == relation)
    }

    pub fn many_to_many_field(&self, name: &str) -> Option<&ManyToManySchema> {
        self.many_to_many.iter().find(|m2m| m2m.name == name)
    }

    /// Attach a many-to-many link built with [`many_to_many`].
    pub fn with_many_to_many(mut self, link: ManyToManySchema) -> Self {
        self.many_to_many.push(link);
        self
    }
}

/// Describe the table behind entity `E`.
///
/// Only relations owned by `E` (the `belongs_to` side) are reported as
/// foreign keys.
pub fn describe<E: AppModel>() -> ModelSchema {
    let primary_keys: Vec<&'static str> = E::PrimaryKey::iter()
        .map(|pk| pk.into_column().as_str())
        .collect();

    let fields = E::Column::iter()
        .map(|column| {
            let def = column.def();
            let name = column.as_str();
            let primary_key = primary_keys.contains(&name);

            FieldSchema {
                name,
                column_type: def.get_column_type().clone(),
                nullable: def.is_null(),
                unique: primary_key || def.is_unique(),
                primary_key,
            }
        })
        .collect();

    let foreign_keys = E::Relation::iter()
        .filter_map(|relation| {
            let def = relation.def();
            if def.is_owner {
                return None;
            }

            Some(ForeignKeySchema {
                relation: format!("{:?}", relation),
                to_table: table_name(&def.to_tbl),
                on_delete: def.on_delete.as_ref().map(OnDelete::from),
            })
        })
        .collect();

    ModelSchema {
        table: E::default().table_name().to_string(),
        app_label: E::APP_LABEL,
        fields,
        foreign_keys,
        many_to_many: Vec::new(),
    }
}

/// Describe the many-to-many link from `A` to `B` exposed as field `name`.
///
/// Returns `None` when `A` reaches `B` directly rather than through a join
/// table.
pub fn many_to_many<A, B>(name: &str) -> Option<ManyToManySchema>
where
    A: EntityTrait + Related<B>,
    B: EntityTrait,
{
    let via = <A as Related<B>>::via()?;

    Some(ManyToManySchema {
        name: name.to_string(),
        to_table: B::default().table_name().to_string(),
        through: table_name(&via.to_tbl),
    })
}

/// Schema of every inventory table, parents first.
pub fn inventory_models() -> Vec<ModelSchema> {
    use entity::prelude::*;

    let mut product = describe::<Product>();
    if let Some(link) = many_to_many::<Product, ProductType>("product_type") {
        product = product.with_many_to_many(link);
    }

    let mut product_line = describe::<ProductLine>();
    if let Some(link) = many_to_many::<ProductLine, AttributeValue>("attribute_values") {
        product_line = product_line.with_many_to_many(link);
    }

    vec![
        describe::<Category>(),
        describe::<SeasonalEvent>(),
        describe::<ProductType>(),
        product,
        describe::<ProductProductType>(),
        describe::<Attribute>(),
        describe::<AttributeValue>(),
        product_line,
        describe::<ProductLineAttributeValue>(),
        describe::<ProductImage>(),
    ]
}

/// Resolve a relation's table reference to one of the inventory table names.
fn table_name(table: &TableRef) -> String {
    use entity::prelude::*;

    let known = [
        (Category.table_ref(), Category.table_name().to_string()),
        (SeasonalEvent.table_ref(), SeasonalEvent.table_name().to_string()),
        (ProductType.table_ref(), ProductType.table_name().to_string()),
        (Product.table_ref(), Product.table_name().to_string()),
        (
            ProductProductType.table_ref(),
            ProductProductType.table_name().to_string(),
        ),
        (Attribute.table_ref(), Attribute.table_name().to_string()),
        (AttributeValue.table_ref(), AttributeValue.table_name().to_string()),
        (ProductLine.table_ref(), ProductLine.table_name().to_string()),
        (
            ProductLineAttributeValue.table_ref(),
            ProductLineAttributeValue.table_name().to_string(),
        ),
        (ProductImage.table_ref(), ProductImage.table_name().to_string()),
    ];

    known
        .into_iter()
        .find(|(table_ref, _)| table_ref == table)
        .map(|(_, name)| name)
        .unwrap_or_else(|| format!("{:?}", table))
}

/// SQL-ish rendering of a column type, e.g. `varchar(100)` or `decimal(5, 2)`.
pub fn sql_type(column_type: &ColumnType) -> String {
    match column_type {
        ColumnType::String(StringLen::N(len)) => format!("varchar({})", len),
        ColumnType::String(_) => "varchar".to_string(),
        ColumnType::Char(Some(len)) => format!("char({})", len),
        ColumnType::Text => "text".to_string(),
        ColumnType::Integer => "integer".to_string(),
        ColumnType::BigInteger => "bigint".to_string(),
        ColumnType::Float => "float".to_string(),
        ColumnType::Double => "double".to_string(),
        ColumnType::Decimal(Some((precision, scale))) => {
            format!("decimal({}, {})", precision, scale)
        }
        ColumnType::Decimal(None) => "decimal".to_string(),
        ColumnType::Boolean => "bool".to_string(),
        ColumnType::DateTime => "datetime".to_string(),
        ColumnType::Timestamp => "timestamp".to_string(),
        ColumnType::Date => "date".to_string(),
        ColumnType::Uuid => "uuid".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

impl fmt::Display for ModelSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.table, self.app_label)?;

        for field in &self.fields {
            write!(f, "  {:<20} {}", field.name, sql_type(&field.column_type))?;
            if field.primary_key {
                write!(f, " primary key")?;
            } else if field.unique {
                write!(f, " unique")?;
            }
            if field.nullable {
                write!(f, " null")?;
            }
            writeln!(f)?;
        }

        for fk in &self.foreign_keys {
            write!(f, "  fk {} -> {}", fk.relation, fk.to_table)?;
            if let Some(action) = fk.on_delete {
                write!(f, " on delete {}", action.as_sql())?;
            }
            writeln!(f)?;
        }

        for m2m in &self.many_to_many {
            writeln!(
                f,
                "  m2m {} -> {} through {}",
                m2m.name, m2m.to_table, m2m.through
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::*;

    use super::*;

    #[test]
    fn renders_column_types() {
        assert_eq!(sql_type(&ColumnType::String(StringLen::N(100))), "varchar(100)");
        assert_eq!(sql_type(&ColumnType::Decimal(Some((5, 2)))), "decimal(5, 2)");
        assert_eq!(sql_type(&ColumnType::Boolean), "bool");
    }

    #[test]
    fn maps_referential_actions() {
        assert_eq!(OnDelete::from(&ForeignKeyAction::Restrict), OnDelete::Restrict);
        assert_eq!(OnDelete::from(&ForeignKeyAction::Cascade), OnDelete::Cascade);
        assert_eq!(OnDelete::from(&ForeignKeyAction::NoAction), OnDelete::NoAction);
        assert_eq!(OnDelete::SetNull.as_sql(), "SET NULL");
    }

    #[test]
    fn protected_relation_reports_restrict() {
        let schema = describe::<Product>();
        let category = schema.foreign_key("Category").unwrap();

        assert_eq!(category.on_delete, Some(OnDelete::Restrict));
    }

    #[test]
    fn primary_key_counts_as_unique() {
        let schema = describe::<Attribute>();
        let id = schema.field("id").unwrap();

        assert!(id.primary_key);
        assert!(id.unique);
        assert!(!id.nullable);
    }

    #[test]
    fn has_many_relations_are_not_foreign_keys() {
        let schema = describe::<Category>();

        assert_eq!(schema.foreign_keys.len(), 1);
        assert_eq!(schema.foreign_keys[0].relation, "Parent");
        assert_eq!(schema.foreign_keys[0].to_table, "inventory_category");
    }

    #[test]
    fn direct_relation_has_no_join_table() {
        assert!(many_to_many::<Product, Category>("category").is_none());
    }

    #[test]
    fn lists_every_inventory_table() {
        let tables: Vec<String> = inventory_models().into_iter().map(|m| m.table).collect();

        assert_eq!(tables.len(), 10);
        assert!(tables.contains(&"inventory_productline_attributevalue".to_string()));
    }

    #[test]
    fn display_lists_fields_and_links() {
        let product = inventory_models()
            .into_iter()
            .find(|m| m.table == "inventory_product")
            .unwrap();
        let rendered = product.to_string();

        assert!(rendered.starts_with("inventory_product (inventory)"));
        assert!(rendered.contains("slug"));
        assert!(rendered.contains("fk Category -> inventory_category on delete RESTRICT"));
        assert!(rendered.contains(
            "m2m product_type -> inventory_product_type through inventory_product_producttype"
        ));
    }
}
