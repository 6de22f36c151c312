pub mod text;
pub mod math;
pub mod hash;
pub mod plot;

// number and grid routines shared by the programs
pub mod cpu {
    pub mod is_prime;
    pub mod palindrome;
    pub mod armstrong;
    pub mod factorial;
    pub mod matrix;
}
