use crate::models::Problem;
use crate::models::problem::{Client, ClientId, ConnectionCosts, Cost, Facility, FacilityId};

pub fn create_facilities(facilities: &[(FacilityId, Cost)]) -> Vec<Facility> {
    facilities.iter().map(|&(id, opening_cost)| Facility { id, opening_cost }).collect()
}

pub fn create_clients(clients: &[ClientId]) -> Vec<Client> {
    clients.iter().map(|&id| Client { id }).collect()
}

/// Creates a problem from facilities with opening costs, client ids and cost rows (one per client).
pub fn create_problem(facilities: &[(FacilityId, Cost)], clients: &[ClientId], rows: &[&[Cost]]) -> Problem {
    Problem::from_matrix(
        create_facilities(facilities),
        create_clients(clients),
        rows.iter().map(|row| row.to_vec()).collect(),
    )
    .expect("cannot create problem")
}

/// Creates a problem from sparse costs.
pub fn create_sparse_problem(
    facilities: &[(FacilityId, Cost)],
    clients: &[ClientId],
    costs: &[((FacilityId, ClientId), Cost)],
) -> Problem {
    let costs = costs.iter().cloned().collect::<ConnectionCosts>();

    Problem::new(create_facilities(facilities), create_clients(clients), costs).expect("cannot create problem")
}

/// Five facilities and seven clients with a known greedy solution:
/// facility 2 serves [1, 2, 5, 7], facility 4 serves [3, 4, 6], total cost is 38.
pub fn create_reference_problem() -> Problem {
    create_problem(
        &[(1, 6.), (2, 10.), (3, 12.), (4, 5.), (5, 8.)],
        &[1, 2, 3, 4, 5, 6, 7],
        &[
            &[4., 2., 5., 8., 6.],
            &[3., 2., 6., 7., 9.],
            &[6., 8., 1., 4., 7.],
            &[5., 7., 2., 3., 4.],
            &[7., 4., 10., 9., 3.],
            &[1., 9., 8., 3., 6.],
            &[12., 5., 8., 3., 7.],
        ],
    )
}

/// Two facilities, three clients: all clients are served by facility 1 in the first round.
pub fn create_single_round_problem() -> Problem {
    create_problem(&[(1, 10.), (2, 1.)], &[1, 2, 3], &[&[1., 100.], &[1., 100.], &[1., 2.]])
}
