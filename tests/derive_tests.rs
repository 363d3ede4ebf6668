//! Tests for the procedural macros: `#[derive(Lenses)]`, `curry!` and `uncurry!`.

use fpkit::either::Either;
use fpkit::optics::Lens;
use fpkit::{Lenses, curry, uncurry};
use rstest::rstest;

// =============================================================================
// Lenses
// =============================================================================

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Account {
    owner: String,
    balance: i64,
    limits: Limits,
}

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Limits {
    daily: i64,
    single: i64,
}

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Tagged<T> {
    tag: &'static str,
    value: T,
}

fn sample_account() -> Account {
    Account {
        owner: "ada".to_string(),
        balance: 100,
        limits: Limits { daily: 500, single: 200 },
    }
}

#[rstest]
fn derived_lens_gets_and_sets() {
    let balance = Account::balance_lens();
    let account = sample_account();

    assert_eq!(*balance.get(&account), 100);
    assert_eq!(balance.set(account.clone(), 5).balance, 5);
    assert_eq!(balance.set(account, 5).owner, "ada");
}

#[rstest]
fn derived_lenses_compose() {
    let daily = Account::limits_lens().compose(Limits::daily_lens());
    let raised = daily.modify(sample_account(), |limit| limit * 2);
    assert_eq!(raised.limits, Limits { daily: 1000, single: 200 });
}

#[rstest]
fn derived_lens_on_generic_struct() {
    let value = Tagged::<u8>::value_lens();
    let tagged = Tagged { tag: "port", value: 8_u8 };
    assert_eq!(value.set(tagged, 9), Tagged { tag: "port", value: 9 });
}

#[rstest]
fn derived_lens_is_cloneable() {
    let owner = Account::owner_lens();
    let copy = owner.clone();
    assert_eq!(copy.get(&sample_account()), owner.get(&sample_account()));
}

#[rstest]
#[case(50, Either::Right(50))]
#[case(300, Either::Left("over single limit: 300".to_string()))]
fn derived_lenses_in_do_notation(#[case] amount: i64, #[case] expected_balance: Either<String, i64>) {
    let balance = Account::balance_lens();
    let result = Either::<String, _>::do_(sample_account())
        .bind_l(&balance, |current| {
            if amount > 200 {
                Either::Left(format!("over single limit: {amount}"))
            } else {
                Either::Right(current - amount)
            }
        })
        .map(|account| account.balance);
    assert_eq!(result, expected_balance);
}

// =============================================================================
// curry! / uncurry!
// =============================================================================

fn clamp(low: i32, high: i32, value: i32) -> i32 {
    value.clamp(low, high)
}

#[rstest]
fn curry_a_closure() {
    let add = curry!(|a: i32, b: i32| a + b);
    let add_five = add(5);
    assert_eq!(add_five(1), 6);
    assert_eq!(add_five(10), 15);
}

#[rstest]
fn curry_a_function_with_arity() {
    let curried = curry!(clamp, 3);
    let percent = curried(0)(100);
    assert_eq!(percent(150), 100);
    assert_eq!(percent(-5), 0);
    assert_eq!(percent(42), 42);
}

#[rstest]
fn curried_arguments_are_cloned_per_call() {
    let repeat = curry!(|word: String, count: usize| word.repeat(count));
    let echo = repeat("ab".to_string());
    assert_eq!(echo(2), "abab");
    assert_eq!(echo(3), "ababab");
}

#[rstest]
fn uncurry_restores_the_arguments() {
    let curried = curry!(clamp, 3);
    let restored = uncurry!(curried, 3);
    assert_eq!(restored(1, 10, 42), clamp(1, 10, 42));
}

#[rstest]
fn uncurry_a_hand_written_curried_closure() {
    let subtract = |a: i32| move |b: i32| a - b;
    let uncurried = uncurry!(subtract, 2);
    assert_eq!(uncurried(10, 4), 6);
}
