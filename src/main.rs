use sqliterally::{MySql, Postgres, query, sql};

fn main() -> sqliterally::Result<()> {
    let recent = query()
        .select("id")
        .from("orders")
        .where_clause(sql!("created_at > {}", "2024-01-01")?);

    let built = query()
        .select("name")
        .select("email")
        .from("customers")
        .where_clause(sql!("id IN ({})", recent)?)
        .or_where_clause(sql!("vip = {}", true)?)
        .order_by("name")
        .limit(sql!("{}", 10)?)
        .build()?;

    println!("{}", built.to_sql::<Postgres>());
    println!("{}", built.to_sql::<MySql>());
    println!("{:?}", built.values());

    Ok(())
}
