//! Define a table with constraints and print the CREATE statement.

use liteqb::schema::{ColumnOptions, DataType, DefaultValue};
use liteqb::{create_table, schema, QbResult, Value};

fn main() -> QbResult<()> {
    let mut orders = create_table("orders")?;
    orders
        .add_column("user_id", DataType::Integer)?
        .add_column_opts(
            "status",
            DataType::Text,
            ColumnOptions {
                allow_nulls: false,
                default: Some(DefaultValue::Value(Value::Text("new".to_string()))),
                ..Default::default()
            },
        )?
        .add_column("total", DataType::Real)?
        .add_unique_constraint("user_id")?
        .add_foreign_key("user_id", "users", "id")?
        .if_not_exists(true);

    println!("{}", orders.build()?);

    let ddl = schema();
    println!(
        "{}",
        ddl.create_index("idx_orders_user", "orders", &["user_id"], false)
    );
    println!(
        "{}",
        ddl.create_view("open_orders", "SELECT * FROM orders WHERE status = 'new'")
    );
    println!("{}", ddl.drop_table("orders_staging"));

    Ok(())
}
