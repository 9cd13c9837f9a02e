//! Print the inventory table as JSON.
//!
//! Search, sort and column filters come from `WIGSTOCK_*` variables; see
//! `wigstock_infra::config`. Each row carries the id plus the table's
//! header columns, keyed by label.

use std::sync::Arc;

use anyhow::Context;
use serde_json::{Map, Value};

use wigstock_infra::{
    AppConfig, InMemoryInventoryStore, InventoryController, TracingNotifier, demo,
};
use wigstock_inventory::{Column, InventoryItem};
use wigstock_observability::LogConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    wigstock_observability::init(&LogConfig::from_env());

    let config = AppConfig::from_env().context("invalid configuration")?;
    let output = render(&config).await?;
    println!("{output}");
    Ok(())
}

async fn render(config: &AppConfig) -> anyhow::Result<String> {
    let store = Arc::new(InMemoryInventoryStore::new());
    if config.seed_demo {
        demo::seed(&*store).await.context("seeding demo inventory")?;
    }

    let mut controller = InventoryController::new(store, TracingNotifier, config.session());
    controller
        .refresh()
        .await
        .context("loading inventory (is WIGSTOCK_USER set?)")?;

    controller.set_search_term(config.search.clone());
    for (column, value) in &config.filters {
        controller.set_filter(*column, value.clone());
    }
    controller.set_sort(config.sort);

    let rows: Vec<Value> = controller
        .visible_records()
        .into_iter()
        .map(table_row)
        .collect();
    tracing::info!(
        total = controller.view().records().len(),
        filters = controller.view().filters().len(),
        visible = rows.len(),
        "inventory rendered"
    );
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn table_row(item: &InventoryItem) -> Value {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::String(item.id.to_string()));
    for column in Column::TABLE {
        let cell = item.field_text(column).map_or(Value::Null, Value::String);
        row.insert(column.label().to_string(), cell);
    }
    Value::Object(row)
}
