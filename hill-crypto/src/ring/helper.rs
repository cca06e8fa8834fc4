/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b), with g >= 0.
///
/// Iterative form of the extended Euclidean algorithm: the Bezout
/// coefficients are carried alongside the remainders through each division
/// step, so the loop runs O(log min(|a|, |b|)) times and there is no
/// recursion to unwind.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut prev_r, mut r) = (a, b);
    let (mut prev_x, mut x) = (1i64, 0i64);
    let (mut prev_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = prev_r / r;
        (prev_r, r) = (r, prev_r - q * r);
        (prev_x, x) = (x, prev_x - q * x);
        (prev_y, y) = (y, prev_y - q * y);
    }

    if prev_r < 0 {
        return (-prev_r, -prev_x, -prev_y);
    }
    (prev_r, prev_x, prev_y)
}
