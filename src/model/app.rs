//! App membership of the catalog entities.

use sea_orm::EntityTrait;

/// An entity that belongs to an app and is therefore routable.
pub trait AppModel: EntityTrait {
    /// Label of the app the entity belongs to.
    const APP_LABEL: &'static str;
}

macro_rules! inventory_models {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl AppModel for $entity {
                const APP_LABEL: &'static str = entity::APP_LABEL;
            }
        )+
    };
}

inventory_models!(
    entity::prelude::Category,
    entity::prelude::SeasonalEvent,
    entity::prelude::ProductType,
    entity::prelude::Product,
    entity::prelude::ProductProductType,
    entity::prelude::Attribute,
    entity::prelude::AttributeValue,
    entity::prelude::ProductLine,
    entity::prelude::ProductLineAttributeValue,
    entity::prelude::ProductImage,
);
