use outcome_rail::prelude::*;

fn parse_port(input: &str) -> Outcome<u16, String> {
    input.parse::<u16>().map_err(|e| format!("{input}: {e}")).into()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fetch {
    Hit,
    Miss,
    Stale,
}

dispatch! {
    struct CacheDispatch: Fetch {
        success = Fetch::Hit,
        failure = Fetch::Miss,
        error = String,
    }
}

fn lookup(key: &str) -> Signaled<u64, CacheDispatch> {
    match key {
        "answer" => Signaled::success(42),
        "old" => signal!(Fetch::Stale, "entry expired"),
        _ => signal!(),
    }
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Outcome: distinct success and failure types
    println!("\n1. Outcome:");
    for input in ["8080", "http"] {
        let port = parse_port(input);
        match port.as_success() {
            Some(p) => println!("port {p}"),
            None => println!("error: {}", port.get_failure()),
        }
    }

    // 2. Twin: settle the answer late
    println!("\n2. Twin:");
    let mut last = Twin::<u32>::default();
    for (attempt, ok) in [(1, false), (2, false), (3, true)] {
        if ok {
            last.set_success(attempt);
        } else {
            last.set_failure(attempt);
        }
    }
    println!("succeeded on attempt {}", last.get_success());

    // 3. Maybe and Flag: failures without payload
    println!("\n3. Maybe / Flag:");
    let nickname: Maybe<&str> = None.into();
    println!("nickname: {}", nickname.value_or(&"anonymous"));
    let mut dirty = Flag::new(true);
    let was_dirty = dirty.take_success();
    println!("dirty: {was_dirty}, then {}", dirty.get_success());

    // 4. Signaled: more than two outcomes, checked access
    println!("\n4. Signaled:");
    for key in ["answer", "old", "nope"] {
        let hit = lookup(key);
        match hit.get_success() {
            Ok(v) => println!("{key}: {v}"),
            Err(e) => println!("{key}: {e} ({:?})", hit.error()),
        }
    }

    // 5. Collecting every failure
    println!("\n5. Collecting:");
    let all: Outcome<Vec<u16>, FailureVec<String>> =
        ["80", "x", "443", "y"].into_iter().map(parse_port).collect();
    if let Outcome::Failure(errors) = all {
        println!("Found {} errors:", errors.len());
        for err in errors {
            println!("- {err}");
        }
    }
}
