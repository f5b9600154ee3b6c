//! Build the four statement kinds and print the (sql, params) pairs.

use liteqb::{delete, insert, select, update};
use liteqb::{ConflictStrategy, Op, Order, QbResult, QueryBuilder, WhereGroup};

fn main() -> QbResult<()> {
    let mut adults = WhereGroup::new();
    adults.add_op("age", Op::Gt, 18)?.add("deleted_at")?;

    let mut users = select("users")?;
    users
        .columns(["id", "username", "age"])
        .filter(adults)
        .order_by("age", Order::Desc)
        .limit(10);
    let (sql, params) = users.build()?;
    println!("{sql}\n  params: {params:?}\n");

    let mut new_user = insert("users")?;
    new_user.set("username", "alice")?;
    new_user.set("age", 30)?;
    new_user.on_conflict(ConflictStrategy::Ignore);
    let (sql, params) = new_user.build()?;
    println!("{sql}\n  params: {params:?}\n");

    let mut by_name = WhereGroup::new();
    by_name.add_value("username", "alice")?;
    let mut deactivate = update("users")?;
    deactivate.set("active", false)?;
    deactivate.filter(by_name);
    let (sql, params) = deactivate.build()?;
    println!("{sql}\n  params: {params:?}\n");

    let mut stale = WhereGroup::new();
    stale.add_op("age", Op::Lt, 0)?;
    let mut purge = delete("users")?;
    purge.filter(stale);
    let (sql, params) = purge.build()?;
    println!("{sql}\n  params: {params:?}");

    Ok(())
}
