use rs2_observable::*;

fn main() {
    // Subscribe with callbacks
    of![1, 2, 3].subscribe_with(
        Some(|x: i32| println!("next: {}", x)),
        Some(|| println!("completed")),
    );

    // Transform values on the way through
    let mut result = Vec::new();
    of![1, 2, 3]
        .map(|x| x + 1)           // 2, 3, 4
        .map(|x| x * 2)           // 4, 6, 8
        .subscribe_next(|x| result.push(x));
    println!("Result: {:?}", result);  // Output: Result: [4, 6, 8]

    // Subscribe with an explicit observer
    let mut observer = AnyObserver::new(|notification: Notification<String>| match notification {
        Notification::Next(s) => println!("got {}", s),
        Notification::Completed => println!("done"),
    });
    just(2).map(|x| format!("value {}", x)).subscribe(&mut observer);
}
