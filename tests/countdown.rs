//! Generator style coroutines: countdowns driven by hand.
use codrive::{AsCoro, Coro, Error, Handle, Status, Step, Suspension};
use simple_test_case::test_case;

fn countdown(
    start: i64,
) -> Coro<i64, i64, (), &'static str, impl Future<Output = Result<(), &'static str>>> {
    Coro::from(async move |handle: Handle<i64, i64, &'static str>| {
        let mut val = start;
        while val >= 0 {
            let delta = handle.yield_value(val).await?.unwrap_or(1);
            val -= delta;
        }

        Ok(())
    })
}

fn plain(step: Result<Step<i64, i64, (), &'static str>, Error<&'static str>>) -> i64 {
    match step {
        Ok(Step::Yielded(Suspension::Plain(v))) => v,
        other => panic!("expected a plain yield, got {other:?}"),
    }
}

#[test_case(4, &[4, 3, 2, 1, 0]; "from four")]
#[test_case(0, &[0]; "from zero")]
#[test_case(-1, &[]; "already negative")]
#[test]
fn countdown_yields_to_zero(start: i64, expected: &[i64]) {
    let mut coro = countdown(start);
    let mut seen = Vec::new();

    loop {
        match coro.resume() {
            Ok(Step::Yielded(Suspension::Plain(v))) => seen.push(v),
            Ok(Step::Yielded(Suspension::Pending(_))) => panic!("unexpected pending operation"),
            Ok(Step::Done(())) => break,
            Err(e) => panic!("countdown failed: {e}"),
        }
    }

    assert_eq!(seen, expected);
}

#[test]
fn sent_values_override_the_default_decrement() {
    let mut coro = countdown(10);

    assert_eq!(plain(coro.resume()), 10);
    assert_eq!(plain(coro.resume()), 9);
    assert_eq!(plain(coro.send(5)), 4);
    assert_eq!(plain(coro.resume()), 3);
}

#[test]
fn a_value_sent_before_the_first_suspension_is_discarded() {
    let mut coro = countdown(3);

    assert_eq!(plain(coro.send(100)), 3);
    assert_eq!(plain(coro.resume()), 2);
}

#[test]
fn a_body_that_never_suspends_completes_on_first_resume() {
    let mut coro = Coro::from(async |_: Handle<i64, i64, &'static str>| Ok(42));

    assert_eq!(coro.status(), Status::NotStarted);
    assert!(matches!(coro.resume(), Ok(Step::Done(42))));
    assert_eq!(coro.status(), Status::Completed);
}

#[test]
fn terminal_coroutines_replay_their_outcome() {
    let mut coro = countdown(0);

    assert_eq!(plain(coro.resume()), 0);
    assert!(matches!(coro.resume(), Ok(Step::Done(()))));
    assert_eq!(coro.status(), Status::Completed);

    // no body code re-runs from a terminal state: every operation is a pure
    // replay of the stored outcome
    for _ in 0..3 {
        assert!(matches!(coro.resume(), Ok(Step::Done(()))));
        assert!(matches!(coro.send(99), Ok(Step::Done(()))));
        assert!(matches!(coro.fail("boom"), Ok(Step::Done(()))));
        assert_eq!(coro.stop(()), Ok(()));
    }
}

#[test]
fn coroutine_ids_are_distinct() {
    let a = countdown(1);
    let b = countdown(1);

    assert_ne!(a.id(), b.id());
}

#[test]
fn closures_capturing_references_work() {
    fn double_nums(
        nums: &[i64],
    ) -> Coro<i64, i64, &'static str, String, impl Future<Output = Result<&'static str, String>>>
    {
        Coro::from(async |handle: Handle<i64, i64, String>| {
            for &n in nums.iter() {
                let doubled = handle
                    .yield_value(n)
                    .await?
                    .expect("the step function always replies");
                assert_eq!(doubled, n * 2);
            }

            Ok("done")
        })
    }

    let res = double_nums(&[1, 2, 3]).run_sync(|n| Ok(n * 2));

    assert_eq!(res, Ok("done"));
}

struct CountdownFromThree;

impl AsCoro for CountdownFromThree {
    type Snd = i64;
    type Rcv = i64;
    type Out = ();
    type Err = &'static str;

    async fn as_coro(handle: Handle<i64, i64, &'static str>) -> Result<(), &'static str> {
        let mut val = 3;
        while val >= 0 {
            let delta = handle.yield_value(val).await?.unwrap_or(1);
            val -= delta;
        }

        Ok(())
    }
}

#[test]
fn type_level_templates_initialize_coroutines() {
    let seen: Vec<i64> = CountdownFromThree::initialize()
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(seen, vec![3, 2, 1, 0]);
}
