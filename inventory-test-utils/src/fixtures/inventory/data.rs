use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::inventory::{factory, InventoryFixtures},
    model::{
        AttributeModel, AttributeValueModel, CategoryModel, ProductImageModel, ProductLineModel,
        ProductModel, ProductTypeModel, SeasonalEventModel,
    },
};

impl<'a> InventoryFixtures<'a> {
    /// Insert a top level category.
    pub async fn insert_mock_category(&self, name: &str) -> Result<CategoryModel, TestError> {
        Ok(factory::mock_category(name, None)
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a category under `parent` one level below its parent.
    pub async fn insert_mock_child_category(
        &self,
        name: &str,
        parent: &CategoryModel,
    ) -> Result<CategoryModel, TestError> {
        let mut category = factory::mock_category(name, Some(parent.id));
        category.level = ActiveValue::Set(parent.level + 1);

        Ok(category.insert(&self.setup.db).await?)
    }

    pub async fn insert_mock_seasonal_event(
        &self,
        name: &str,
    ) -> Result<SeasonalEventModel, TestError> {
        Ok(factory::mock_seasonal_event(name)
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_product_type(
        &self,
        name: &str,
        parent_id: Option<i32>,
    ) -> Result<ProductTypeModel, TestError> {
        Ok(factory::mock_product_type(name, parent_id)
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_product(
        &self,
        name: &str,
        category_id: Option<i32>,
    ) -> Result<ProductModel, TestError> {
        Ok(factory::mock_product(name, category_id)
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_attribute(&self, name: &str) -> Result<AttributeModel, TestError> {
        Ok(factory::mock_attribute(name).insert(&self.setup.db).await?)
    }

    pub async fn insert_mock_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
    ) -> Result<AttributeValueModel, TestError> {
        Ok(factory::mock_attribute_value(attribute_id, value)
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_product_line(
        &self,
        product_id: i32,
        order: i32,
    ) -> Result<ProductLineModel, TestError> {
        Ok(factory::mock_product_line(product_id, order)
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_product_image(
        &self,
        product_line_id: i32,
        order: i32,
    ) -> Result<ProductImageModel, TestError> {
        Ok(factory::mock_product_image(product_line_id, order)
            .insert(&self.setup.db)
            .await?)
    }

    /// Link a product to a product type through the join table.
    pub async fn link_product_type(
        &self,
        product_id: i32,
        product_type_id: i32,
    ) -> Result<entity::product_product_type::Model, TestError> {
        Ok(entity::product_product_type::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            product_type_id: ActiveValue::Set(product_type_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Link a product line to an attribute value through the join table.
    pub async fn link_attribute_value(
        &self,
        product_line_id: i32,
        attribute_value_id: i32,
    ) -> Result<entity::product_line_attribute_value::Model, TestError> {
        Ok(entity::product_line_attribute_value::ActiveModel {
            attribute_value_id: ActiveValue::Set(attribute_value_id),
            product_line_id: ActiveValue::Set(product_line_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
