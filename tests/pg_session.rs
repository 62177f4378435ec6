use products_hr::{DbStore, HrStore, Session};
use tracker_tests::{PgTestContext, Script};

#[tokio::test]
async fn session_round_trip_against_postgres() {
    let Some(ctx) = PgTestContext::new_seeded().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set or unreachable");
        return;
    };

    let pool = platform_db::connect(&ctx.settings).await.unwrap();
    let mut script = Script::new([
        "Add an Employee",
        "Ada",
        "Lovelace",
        "Software Engineer",
        "Grace Hopper",
        "Add Department",
        "Sales",
        "Delete a Role",
        "Sales Lead",
        "View Total Utilized Budget",
        "Exit",
        "View all Employees",
    ]);
    let mut out = Vec::new();

    Session::new(DbStore::new(pool), &mut script, &mut out)
        .run()
        .await
        .unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Employee added!"));
    assert!(printed.contains("Error adding department: "));
    assert!(printed.contains("Deleted role Sales Lead."));
    assert!(printed.contains("| 150000 "));
    assert_eq!(script.remaining(), 1);

    let store = DbStore::new(platform_db::connect(&ctx.settings).await.unwrap());
    let employees = store.employees().await.unwrap();
    let ada = employees.iter().find(|row| row.first_name == "Ada").unwrap();
    assert_eq!(ada.manager_name().as_deref(), Some("Grace Hopper"));
    assert_eq!(ada.department.as_deref(), Some("Engineering"));
    store.close().await.unwrap();

    ctx.cleanup().await;
}

#[tokio::test]
async fn deletes_follow_the_foreign_key_rules() {
    let Some(ctx) = PgTestContext::new_seeded().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set or unreachable");
        return;
    };
    let grace = ctx.seeded.employee_named("Grace Hopper").unwrap().id;
    let finance = ctx.seeded.department_named("Finance").unwrap().id;

    let store = DbStore::new(platform_db::connect(&ctx.settings).await.unwrap());
    assert_eq!(
        store.delete_employee(grace).await.unwrap().as_deref(),
        Some("Grace Hopper")
    );
    assert_eq!(store.delete_employee(grace).await.unwrap(), None);
    assert_eq!(
        store.delete_department(finance).await.unwrap().as_deref(),
        Some("Finance")
    );

    let roles = store.roles().await.unwrap();
    assert!(roles.iter().all(|role| role.title != "Accountant"));
    let employees = store.employees().await.unwrap();
    let alan = employees.iter().find(|row| row.first_name == "Alan").unwrap();
    assert_eq!(alan.manager_name(), None);
    let mary = employees.iter().find(|row| row.first_name == "Mary").unwrap();
    assert_eq!(mary.job_title, None);
    store.close().await.unwrap();

    ctx.cleanup().await;
}
