//! `describe [model]`

use clap::Args;

use crate::{
    error::command::CommandError,
    schema::{inventory_models, ModelSchema},
};

#[derive(Args, Debug, Clone, Default)]
pub struct DescribeArgs {
    /// Table name (`inventory_product`) or model name (`product`), defaults to every table
    pub model: Option<String>,
}

pub fn describe(args: &DescribeArgs) -> Result<Vec<ModelSchema>, CommandError> {
    let models = inventory_models();

    let Some(name) = args.model.as_deref() else {
        return Ok(models);
    };

    let table = if name.starts_with("inventory_") {
        name.to_string()
    } else {
        format!("inventory_{}", name)
    };

    let model = models
        .into_iter()
        .find(|model| model.table == table)
        .ok_or_else(|| CommandError::UnknownModel(name.to_string()))?;

    Ok(vec![model])
}
