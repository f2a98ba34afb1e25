// leanpipe/examples/railway_basics.rs

use leanpipe::{Fault, Maybe, Outcome, SafePipeline};
use std::collections::HashMap;
use tracing::{info, warn};

// 1. A small domain: look up a user, validate the signup form, price an order.
#[derive(Clone, Debug)]
struct User {
  id: u32,
  name: String,
}

fn find_user(id: u32) -> Maybe<User> {
  let users = HashMap::from([(1, "ada"), (2, "grace")]);
  users
    .get(&id)
    .map(|name| User {
      id,
      name: name.to_string(),
    })
    .into()
}

fn check_name(name: &str) -> Outcome<String, Vec<String>> {
  if name.len() >= 3 {
    Outcome::succeeded(name.to_string())
  } else {
    Outcome::failed(vec![format!("name '{name}' is too short")])
  }
}

fn check_age(age: i32) -> Outcome<String, Vec<String>> {
  if age >= 18 {
    Outcome::succeeded(age.to_string())
  } else {
    Outcome::failed(vec![format!("age {age} is under 18")])
  }
}

#[tokio::main]
async fn main() -> Result<(), Fault> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Railway Basics Example ---");

  // 2. Maybe: absence is a value, not a null check.
  let greeting = find_user(1).map(|user| format!("hello {}", user.name));
  let missing = find_user(9).map(|user| format!("hello {}", user.name));
  info!("Lookup 1: {}, lookup 9: {}", greeting, missing);

  // 3. Outcome aggregation keeps every validation failure, in order.
  let signup = Outcome::aggregate(vec![check_name("al"), check_age(16), check_name("alan")]);
  signup.clone().handle(
    |fields| info!("Signup accepted: {:?}", fields),
    |errors| warn!("Signup rejected with {} errors: {:?}", errors.len(), errors),
  );
  assert_eq!(signup.failure().map(Vec::len), Some(2));

  // 4. A lazy pipeline. Nothing below runs until `flatten().await`.
  let order_total = SafePipeline::try_with(|| find_user(2).into_option())
    .select_outcome(|user| match user {
      Some(user) => Outcome::succeeded(user),
      None => Outcome::failed(Fault::Upstream("user not found".into())),
    })
    .select_async(|user: User| async move {
      info!("Pricing order for user {}", user.id);
      (user.id, 3 * 1250)
    })
    .select(|(id, cents)| format!("user {id} owes {}.{:02}", cents / 100, cents % 100));

  info!("Pipeline built, forcing it now...");
  let total = order_total.flatten().await.into_result()?;
  info!("{}", total);

  // 5. A panic inside `try_with` becomes a failure instead of unwinding.
  let divisor = std::hint::black_box(0);
  let guarded = SafePipeline::try_with(move || 100 / divisor).select(|n| n + 1);
  match guarded.flatten().await.into_result() {
    Ok(value) => info!("Unexpected value: {}", value),
    Err(fault) => info!("Captured fault: {}", fault),
  }

  Ok(())
}
