use rs2_observable::*;
use std::collections::VecDeque;

#[test]
fn test_of_accumulates_in_order() {
    let observable = of![1, 2, 3];
    let mut output = Vec::new();
    let mut completed = false;

    observable.subscribe_with(Some(|x: i32| output.push(x)), Some(|| completed = true));

    assert_eq!(output, vec![1, 2, 3]);
    assert!(completed);
}

#[test]
fn test_completion_sees_full_accumulator() {
    let observable = of![1, 2, 3];
    let mut output = Vec::new();
    let mut snapshot_at_completion = Vec::new();

    let mut observer = AnyObserver::new(|notification: Notification<i32>| match notification {
        Notification::Next(x) => output.push(x),
        Notification::Completed => snapshot_at_completion = output.clone(),
    });
    observable.subscribe(&mut observer);
    drop(observer);

    assert_eq!(snapshot_at_completion, vec![1, 2, 3]);
}

#[test]
fn test_just_via_observer() {
    let observable = just(2);
    let mut recorder = Recorder::new();

    observable.subscribe(&mut recorder);

    assert_eq!(
        recorder.notifications(),
        &[Notification::Next(2), Notification::Completed]
    );
}

#[test]
fn test_just_via_callbacks() {
    let observable = just("hello".to_string());
    let mut nexts = Vec::new();
    let mut completions = 0;

    observable.subscribe_with(Some(|s: String| nexts.push(s)), Some(|| completions += 1));

    assert_eq!(nexts, vec!["hello".to_string()]);
    assert_eq!(completions, 1);
}

#[test]
fn test_empty_sequence_only_completes() {
    let observable: Sequence<Vec<i32>, i32> = of![];
    let mut recorder = Recorder::new();

    observable.subscribe(&mut recorder);

    assert_eq!(recorder.notifications(), &[Notification::Completed]);
}

#[test]
fn test_empty_constructor() {
    let mut recorder = Recorder::<u8>::new();
    empty().subscribe(&mut recorder);
    assert_eq!(recorder.into_notifications(), vec![Notification::Completed]);
}

#[test]
fn test_of_function_captures_iterable() {
    let source = vec!["a", "b", "c"];
    let observable = of(source.iter().copied());
    assert_eq!(observable.elements(), &vec!["a", "b", "c"]);
    assert_eq!(observable.collect_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_of_range() {
    let observable = of(1..=5);
    assert_eq!(observable.collect_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_from_sequence_vec_deque() {
    let observable = from_sequence(VecDeque::from(vec![4, 5, 6]));
    assert_eq!(observable.collect_vec(), vec![4, 5, 6]);
    assert_eq!(observable.elements().len(), 3);
}

/// Collection that can only be iterated by reference and cannot be cloned
struct Borrowed(Vec<i32>);

impl<'a> IntoIterator for &'a Borrowed {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn test_sequence_iterates_without_cloning_collection() {
    let observable = from_sequence(Borrowed(vec![7, 8, 9]));

    assert_eq!(observable.collect_vec(), vec![7, 8, 9]);
    assert_eq!(observable.collect_vec(), vec![7, 8, 9]);
    assert_eq!(observable.elements().0, vec![7, 8, 9]);
}

#[test]
fn test_from_sequence_array() {
    let observable = from_sequence([3, 1, 2]);
    assert_eq!(observable.collect_vec(), vec![3, 1, 2]);
}

#[test]
fn test_resubscription_is_independent() {
    let observable = of![1, 2, 3];

    let first = observable.collect_vec();
    let second = observable.collect_vec();

    assert_eq!(first, second);
    assert_eq!(first, vec![1, 2, 3]);
}

#[test]
fn test_missing_callbacks_are_noops() {
    let observable = of![1, 2, 3];

    observable.subscribe_with(None::<fn(i32)>, None::<fn()>);

    let mut completed = false;
    observable.subscribe_completed(|| completed = true);
    assert!(completed);

    let mut seen = Vec::new();
    observable.subscribe_next(|x| seen.push(x));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_subscription_styles_equivalent() {
    let observable = of![5, 6, 7].map(|x| x - 1);

    let mut via_callbacks = Vec::new();
    observable.subscribe_with(
        Some(|x: i32| via_callbacks.push(Notification::Next(x))),
        None::<fn()>,
    );
    via_callbacks.push(Notification::Completed);

    let mut recorder = Recorder::new();
    observable.subscribe(&mut recorder);

    assert_eq!(recorder.into_notifications(), via_callbacks);
}

#[test]
fn test_boxed_observables_share_a_type() {
    let observables: Vec<BoxedObservable<'static, i32>> = vec![
        just(1).boxed(),
        of![2, 3].boxed(),
        of![4].map(|x| x * 10).boxed(),
    ];

    let collected: Vec<Vec<i32>> = observables.iter().map(|o| o.collect_vec()).collect();

    assert_eq!(collected, vec![vec![1], vec![2, 3], vec![40]]);
}

#[test]
fn test_boxed_observable_can_be_mapped() {
    let boxed: BoxedObservable<'static, i32> = of![1, 2].boxed();
    let mapped = boxed.map(|x| x + 100);
    assert_eq!(mapped.collect_vec(), vec![101, 102]);
}

#[test]
fn test_observer_can_be_lent_and_inspected() {
    let mut recorder = Recorder::new();

    just(1).subscribe(&mut recorder);
    of![2, 3].subscribe(&mut recorder);

    assert_eq!(recorder.values(), vec![&1, &2, &3]);
    assert_eq!(recorder.completed_count(), 2);
}
