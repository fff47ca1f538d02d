//! Array-of-Structs and Struct-of-Arrays user records.
//!
//! Both layouts hold the same logical records. The SoA form keeps every age
//! in one contiguous column, which is what the kernels consume; the AoS form
//! strides over whole records to reach each age.

use crate::compute::KernelKind;
use crate::defaults::AGE_MODULUS;
use crate::error::Result;

use super::buffer::try_vec;

/// One user record (AoS element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub age: u8,
}

impl User {
    /// The synthetic record at position `i`.
    pub fn synthetic(i: usize) -> Self {
        Self {
            id: i as u32,
            name: format!("User {}", i),
            age: (i % AGE_MODULUS) as u8,
        }
    }
}

/// `n` synthetic users in AoS layout.
pub fn users_synthetic(n: usize) -> Result<Vec<User>> {
    let mut users = try_vec("user records", n)?;
    users.extend((0..n).map(User::synthetic));
    Ok(users)
}

/// Sum ages by walking the records.
pub fn sum_ages_aos(users: &[User]) -> u64 {
    users.iter().map(|u| u64::from(u.age)).sum()
}

/// Users stored column-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSoA {
    pub ids: Vec<u32>,
    pub names: Vec<String>,
    pub ages: Vec<u8>,
}

impl UserSoA {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve all three columns up front.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            ids: try_vec("user ids", capacity)?,
            names: try_vec("user names", capacity)?,
            ages: try_vec("user ages", capacity)?,
        })
    }

    /// `n` synthetic users in SoA layout.
    pub fn try_synthetic(n: usize) -> Result<Self> {
        let mut soa = Self::try_with_capacity(n)?;
        for i in 0..n {
            soa.push(User::synthetic(i));
        }
        Ok(soa)
    }

    /// Transpose AoS records into columns.
    pub fn from_users(users: &[User]) -> Result<Self> {
        let mut soa = Self::try_with_capacity(users.len())?;
        for u in users {
            soa.push(u.clone());
        }
        Ok(soa)
    }

    pub fn push(&mut self, user: User) {
        self.ids.push(user.id);
        self.names.push(user.name);
        self.ages.push(user.age);
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Sum the age column with `kernel`.
    pub fn sum_ages(&self, kernel: KernelKind) -> u64 {
        kernel.sum(&self.ages)
    }
}
