use super::*;
use crate::helpers::models::*;

fn get_ranked_facilities(list: &RankedList) -> Vec<usize> {
    list.entries().iter().map(|entry| entry.facility_idx).collect()
}

#[test]
fn can_rank_facilities_by_connection_cost() {
    let problem = create_reference_problem();

    let ranked = create_ranked_lists(&problem).expect("cannot rank");

    assert_eq!(ranked.len(), 7);
    assert_eq!(ranked.iter().map(|list| list.client_idx).collect::<Vec<_>>(), (0..7).collect::<Vec<_>>());
    assert_eq!(get_ranked_facilities(&ranked[0]), vec![1, 0, 2, 4, 3]);
    assert_eq!(get_ranked_facilities(&ranked[4]), vec![4, 1, 0, 3, 2]);
    assert_eq!(get_ranked_facilities(&ranked[6]), vec![3, 1, 4, 2, 0]);
    assert_eq!(ranked[6].at(0), Some(&RankedEntry { facility_idx: 3, cost: 3. }));
    assert_eq!(ranked[6].at(5), None);
}

#[test]
fn can_keep_non_decreasing_costs() {
    let problem = create_reference_problem();

    let ranked = create_ranked_lists(&problem).expect("cannot rank");

    ranked.iter().for_each(|list| {
        assert_eq!(list.len(), 5);
        assert!(list.entries().windows(2).all(|pair| pair[0].cost <= pair[1].cost));
    });
}

#[test]
fn can_keep_facility_order_on_equal_costs() {
    let problem = create_problem(&[(1, 1.), (2, 1.), (3, 1.)], &[1], &[&[2., 1., 2.]]);

    let ranked = create_ranked_lists(&problem).expect("cannot rank");

    assert_eq!(get_ranked_facilities(&ranked[0]), vec![1, 0, 2]);
}

#[test]
fn can_fail_on_missing_connection_cost() {
    let problem = create_sparse_problem(&[(1, 5.), (2, 1.)], &[1], &[((1, 1), 3.)]);

    let result = create_ranked_lists(&problem);

    assert_eq!(result.err(), Some(UflError::MissingConnectionCost { facility: 2, client: 1 }));
}

#[test]
fn can_rank_problem_without_facilities() {
    let problem = create_problem(&[], &[1, 2], &[&[], &[]]);

    let ranked = create_ranked_lists(&problem).expect("cannot rank");

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|list| list.is_empty()));
}
