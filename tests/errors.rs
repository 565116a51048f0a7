//! Failure injection at suspension points.
use codrive::{Coro, Error, Handle, Status, Step, Suspension};

#[test]
fn a_handled_failure_resumes_the_body() {
    let mut coro = Coro::from(async |handle: Handle<&'static str, (), String>| {
        match handle.yield_value("working").await {
            Ok(_) => Ok("no failure"),
            Err(_) => Ok("recovered"),
        }
    });

    assert!(matches!(
        coro.resume(),
        Ok(Step::Yielded(Suspension::Plain("working")))
    ));
    assert!(matches!(
        coro.fail("disk on fire".to_string()),
        Ok(Step::Done("recovered"))
    ));
    assert_eq!(coro.status(), Status::Completed);
}

#[test]
fn an_unhandled_failure_marks_the_coroutine_failed() {
    let mut coro = Coro::from(async |handle: Handle<i64, i64, String>| {
        handle.yield_value(1).await?;
        Ok(2)
    });

    assert!(matches!(coro.resume(), Ok(Step::Yielded(_))));

    // the error comes back unchanged to the caller of fail
    assert!(matches!(
        coro.fail("boom".to_string()),
        Err(Error::Uncaught(e)) if e == "boom"
    ));
    assert_eq!(coro.status(), Status::Failed);

    // and is replayed verbatim by every subsequent operation
    assert!(matches!(coro.resume(), Err(Error::Uncaught(e)) if e == "boom"));
    assert!(matches!(coro.send(7), Err(Error::Uncaught(e)) if e == "boom"));
    assert!(matches!(
        coro.fail("other".to_string()),
        Err(Error::Uncaught(e)) if e == "boom"
    ));
    assert!(matches!(coro.stop(0), Err(Error::Uncaught(e)) if e == "boom"));
}

#[test]
fn failing_an_unstarted_coroutine_is_invalid() {
    let mut coro = Coro::from(async |handle: Handle<i64, i64, String>| {
        handle.yield_value(1).await?;
        Ok(0)
    });

    assert!(matches!(
        coro.fail("too early".to_string()),
        Err(Error::InvalidState {
            op: "fail",
            status: Status::NotStarted
        })
    ));

    // the coroutine is untouched and still usable
    assert_eq!(coro.status(), Status::NotStarted);
    assert!(matches!(
        coro.resume(),
        Ok(Step::Yielded(Suspension::Plain(1)))
    ));
}

#[test]
fn an_error_returned_by_the_body_is_surfaced_by_resume() {
    let mut coro = Coro::from(async |handle: Handle<i64, i64, String>| {
        handle.yield_value(1).await?;
        Err::<i64, String>("gave up".to_string())
    });

    assert!(matches!(coro.resume(), Ok(Step::Yielded(_))));
    assert!(matches!(
        coro.resume(),
        Err(Error::Uncaught(e)) if e == "gave up"
    ));
    assert_eq!(coro.status(), Status::Failed);
}

#[test]
fn errors_render_for_humans() {
    let e: Error<String> = Error::InvalidState {
        op: "fail",
        status: Status::NotStarted,
    };
    assert_eq!(e.to_string(), "fail called on a not started coroutine");

    let e: Error<String> = Error::Uncaught("boom".to_string());
    assert_eq!(e.to_string(), "uncaught failure: boom");

    let e: Error<String> = Error::UnsupportedSuspension;
    assert_eq!(
        e.to_string(),
        "pending operation reached a synchronous consumer"
    );
}
