//! 合成用户记录生成器
//!
//! 纯内存计算，不触达存储。字段相互独立随机：
//! 姓名来自真实姓名分布，邮箱语法合法（不与姓名关联、不去重），
//! 年龄均匀落在 [18, 99]，时间戳逐条取生成时刻的 UTC 当前时间。

use chrono::Utc;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{MAX_AGE, MIN_AGE, NewUser};

/// 合成用户记录生成器
///
/// 持有注入的随机数源；`seeded` 构造的生成器字段值可复现，
/// 用于测试。时间戳始终取真实时钟，不参与种子。
pub struct UserGenerator {
    rng: StdRng,
}

impl UserGenerator {
    /// 创建使用操作系统熵源的生成器
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// 创建固定种子的生成器（测试用，字段值可复现）
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 生成 count 条合成用户记录
    ///
    /// count 为 0 时返回空序列，不是错误。
    pub fn generate(&mut self, count: u32) -> Vec<NewUser> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    /// 生成单条记录
    fn generate_one(&mut self) -> NewUser {
        NewUser {
            name: Name().fake_with_rng(&mut self.rng),
            email: SafeEmail().fake_with_rng(&mut self.rng),
            age: self.rng.random_range(MIN_AGE..=MAX_AGE),
            created_at: Utc::now(),
        }
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_count() {
        let mut generator = UserGenerator::new();
        for count in [0u32, 1, 5, 100] {
            let records = generator.generate(count);
            assert_eq!(records.len(), count as usize);
        }
    }

    #[test]
    fn test_generate_zero_is_empty_not_error() {
        let mut generator = UserGenerator::new();
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_all_fields_structurally_valid() {
        // 字段值视为不透明但必须合法：非空姓名、语法合法邮箱、年龄在闭区间内
        let mut generator = UserGenerator::seeded(7);
        for record in generator.generate(500) {
            assert!(!record.name.is_empty(), "姓名不应为空");
            assert!(record.email.contains('@'), "邮箱应包含 @: {}", record.email);
            assert!(
                record.email.split('@').nth(1).is_some_and(|d| d.contains('.')),
                "邮箱应包含域名: {}",
                record.email
            );
            assert!(
                record.age >= MIN_AGE && record.age <= MAX_AGE,
                "年龄越界: {}",
                record.age
            );
            assert!(record.is_structurally_valid());
        }
    }

    #[test]
    fn test_age_covers_bounds() {
        // 样本足够大时闭区间两端都应被取到，验证 random_range 用的是 ..=
        let mut generator = UserGenerator::seeded(42);
        let ages: Vec<i32> = generator.generate(5000).iter().map(|r| r.age).collect();
        assert!(ages.contains(&MIN_AGE), "样本应覆盖最小年龄 18");
        assert!(ages.contains(&MAX_AGE), "样本应覆盖最大年龄 99");
    }

    #[test]
    fn test_seeded_generators_reproduce_values() {
        // 相同种子的两个生成器产出相同的随机字段；时间戳取真实时钟，不参与比较
        let batch_a = UserGenerator::seeded(42).generate(20);
        let batch_b = UserGenerator::seeded(42).generate(20);

        for (a, b) in batch_a.iter().zip(batch_b.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.email, b.email);
            assert_eq!(a.age, b.age);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let batch_a = UserGenerator::seeded(1).generate(20);
        let batch_b = UserGenerator::seeded(2).generate(20);

        // 20 条记录的姓名全部相同的概率可以忽略不计
        let identical = batch_a
            .iter()
            .zip(batch_b.iter())
            .all(|(a, b)| a.name == b.name && a.email == b.email);
        assert!(!identical, "不同种子不应产出完全相同的批次");
    }
}
