use lifecell::{LifeCell, Occupied};
use std::cell::RefCell;
use std::rc::Rc;

/// Records construction and destruction order by id.
struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<String>>>,
}

impl Tracked {
    fn new(id: u32, log: &Rc<RefCell<Vec<String>>>) -> Self {
        log.borrow_mut().push(format!("new {id}"));
        Self { id, log: Rc::clone(log) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.id));
    }
}

#[test]
fn test_list_construct_destroy_reconstruct() {
    let mut cell: LifeCell<Vec<i32>> = [1, 2, 3].into_iter().collect();

    let view = unsafe { cell.assume_occupied() };
    assert_eq!(view.len(), 3);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    unsafe { cell.destroy() };

    cell.construct_from_iter([4, 5]);
    let value = unsafe { cell.get() };
    assert_eq!(value.len(), 2);
    assert_eq!(value, &[4, 5]);
    unsafe { cell.destroy() };
}

#[test]
fn test_construct_then_access_equals_direct_construction() {
    let mut cell = LifeCell::<String>::empty();
    cell.construct_from("direct");
    assert_eq!(unsafe { cell.get() }, &String::from("direct"));

    let mut pair = LifeCell::<(u8, char)>::empty();
    pair.construct_with(|| (1, 'x'));
    assert_eq!(unsafe { *pair.get() }, (1, 'x'));

    unsafe { cell.destroy() };
}

#[test]
fn test_replace_matches_destroy_then_construct() {
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut replaced = LifeCell::new(Tracked::new(1, &log));
    unsafe { replaced.replace_with(|| Tracked::new(2, &log)) };
    let replace_log = log.borrow_mut().split_off(0);

    let mut manual = LifeCell::new(Tracked::new(1, &log));
    unsafe { manual.destroy() };
    manual.construct_with(|| Tracked::new(2, &log));
    let manual_log = log.borrow_mut().split_off(0);

    assert_eq!(replace_log, vec!["new 1", "drop 1", "new 2"]);
    assert_eq!(replace_log, manual_log);
    assert_eq!(unsafe { replaced.get() }.id, unsafe { manual.get() }.id);

    unsafe {
        replaced.destroy();
        manual.destroy();
    }
    assert_eq!(*log.borrow(), vec!["drop 2", "drop 2"]);
}

#[test]
fn test_reuse_cycles_do_not_leak_state() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cell = LifeCell::empty();

    for id in 0..50 {
        let occupied = cell.construct(Tracked::new(id, &log));
        assert_eq!(occupied.id, id);
        occupied.destroy();
    }

    let log = log.borrow();
    assert_eq!(log.len(), 100);
    for (id, pair) in log.chunks(2).enumerate() {
        assert_eq!(pair, [format!("new {id}"), format!("drop {id}")]);
    }
}

#[test]
fn test_reuse_with_different_argument_sets() {
    let mut cell = LifeCell::<Vec<u8>>::empty();
    let inputs: [&[u8]; 4] = [&[1, 2, 3], &[], &[9], &[4, 4, 4, 4]];

    for input in inputs {
        let occupied = cell.construct_from(input);
        assert_eq!(occupied.as_slice(), input);
        assert!(occupied.capacity() >= input.len());
        occupied.destroy();
    }
}

fn total(values: &[u32]) -> u32 {
    values.iter().sum()
}

fn push_one(values: &mut Vec<u32>) {
    values.push(1);
}

fn describe<Q: std::borrow::Borrow<Vec<u32>>>(values: Q) -> usize {
    std::borrow::Borrow::borrow(&values).len()
}

#[test]
fn test_views_stand_in_for_references() {
    let mut cell = LifeCell::new(vec![2u32, 3]);

    {
        let mut occupied: Occupied<'_, Vec<u32>> = unsafe { cell.assume_occupied_mut() };
        push_one(&mut occupied);
        assert_eq!(total(&occupied), 6);
        assert_eq!(describe(occupied.shared()), 3);

        let direct: &mut Vec<u32> = occupied.into_mut();
        direct.push(4);
    }

    let shared = unsafe { cell.assume_occupied() };
    assert_eq!(total(&shared), 10);
    assert_eq!(shared.as_ref(), &vec![2, 3, 1, 4]);
    assert!(std::ptr::eq(shared.into_ref(), unsafe { cell.get() }));

    unsafe { cell.destroy() };
}

#[test]
fn test_swap_moves_values_between_cells() {
    let mut a = LifeCell::new(String::from("left"));
    let mut b = LifeCell::new(String::from("right"));
    a.swap(&mut b);
    unsafe {
        assert_eq!(a.take(), "right");
        assert_eq!(b.take(), "left");
    }
}

#[test]
fn test_array_of_cells_tracks_fill_level_externally() {
    let mut slots = LifeCell::<String>::empty_array::<8>();
    let mut len = 0;

    for word in ["a", "bb", "ccc"] {
        slots[len].construct_from(word);
        len += 1;
    }

    let lengths: Vec<usize> = slots[..len]
        .iter()
        .map(|s| unsafe { s.get() }.len())
        .collect();
    assert_eq!(lengths, vec![1, 2, 3]);

    for slot in &mut slots[..len] {
        unsafe { slot.destroy() };
    }
}
