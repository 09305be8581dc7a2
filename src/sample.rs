//! Built-in demonstration data.

use crate::models::Customer;

/// Ten fixed customers on a 100×100 grid.
///
/// Searching all ten evaluates 10! = 3,628,800 orderings; take a prefix for
/// quick runs.
///
/// # Examples
///
/// ```
/// use u_route_exact::sample::sample_customers;
///
/// let customers = sample_customers();
/// assert_eq!(customers.len(), 10);
/// assert_eq!(customers[0].name(), "Customer 1");
/// ```
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("Customer 1", 10, 20),
        Customer::new("Customer 2", 90, 24),
        Customer::new("Customer 3", 34, 63),
        Customer::new("Customer 4", 67, 1),
        Customer::new("Customer 5", 24, 84),
        Customer::new("Customer 6", 51, 44),
        Customer::new("Customer 7", 97, 92),
        Customer::new("Customer 8", 77, 13),
        Customer::new("Customer 9", 35, 39),
        Customer::new("Customer 10", 85, 29),
    ]
}
