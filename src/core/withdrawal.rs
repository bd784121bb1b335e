use super::money::Money;
use super::types::{AccountKind, Allocation, WithdrawalPolicy};

pub const TAXABLE_FIRST_ORDER: [AccountKind; 3] =
    [AccountKind::PostTax, AccountKind::PreTax, AccountKind::Roth];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WithdrawalOutcome {
    pub amounts: Allocation,
    pub balances: Allocation,
    /// Part of the request no account could cover.
    pub shortfall: Money,
}

/// Splits a gross withdrawal across the three accounts. Never takes more
/// than a positive balance holds; anything left over is reported as shortfall.
pub trait WithdrawalStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn withdraw(&self, need: Money, balances: Allocation) -> WithdrawalOutcome;
}

pub fn strategy_for(policy: &WithdrawalPolicy) -> Box<dyn WithdrawalStrategy> {
    match policy {
        WithdrawalPolicy::TaxableFirst => Box::new(Sequential::taxable_first()),
        WithdrawalPolicy::Proportional => Box::new(Proportional),
        WithdrawalPolicy::Custom(order) => Box::new(Sequential::new(*order)),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sequential {
    order: [AccountKind; 3],
}

impl Sequential {
    pub const fn new(order: [AccountKind; 3]) -> Self {
        Self { order }
    }

    pub const fn taxable_first() -> Self {
        Self::new(TAXABLE_FIRST_ORDER)
    }

    pub fn order(&self) -> [AccountKind; 3] {
        self.order
    }
}

impl WithdrawalStrategy for Sequential {
    fn name(&self) -> &'static str {
        if self.order == TAXABLE_FIRST_ORDER {
            "taxable-first"
        } else {
            "custom"
        }
    }

    fn withdraw(&self, need: Money, balances: Allocation) -> WithdrawalOutcome {
        let mut outcome = WithdrawalOutcome {
            balances,
            ..WithdrawalOutcome::default()
        };
        let remaining = sweep(&self.order, need.non_negative(), &mut outcome);
        outcome.shortfall = remaining;
        outcome
    }
}

/// Pro-rata by positive balance; the rounding remainder goes to post-tax and
/// any capped share is swept up in taxable-first order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Proportional;

impl WithdrawalStrategy for Proportional {
    fn name(&self) -> &'static str {
        "proportional"
    }

    fn withdraw(&self, need: Money, balances: Allocation) -> WithdrawalOutcome {
        let need = need.non_negative();
        let mut outcome = WithdrawalOutcome {
            balances,
            ..WithdrawalOutcome::default()
        };

        let available = Allocation::new(
            balances.pre_tax.non_negative(),
            balances.roth.non_negative(),
            balances.post_tax.non_negative(),
        );
        let pool = available.total();
        if !pool.is_positive() || !need.is_positive() {
            outcome.shortfall = need;
            return outcome;
        }

        let target = need.min(pool);
        let pre_tax = target.mul_ratio(available.pre_tax.cents(), pool.cents());
        let roth = target.mul_ratio(available.roth.cents(), pool.cents());
        let post_tax = target - pre_tax - roth;

        let mut remaining = need;
        for (account, share) in [
            (AccountKind::PreTax, pre_tax),
            (AccountKind::Roth, roth),
            (AccountKind::PostTax, post_tax),
        ] {
            remaining -= take(account, share, &mut outcome);
        }

        outcome.shortfall = sweep(&TAXABLE_FIRST_ORDER, remaining, &mut outcome);
        outcome
    }
}

fn sweep(order: &[AccountKind], mut remaining: Money, outcome: &mut WithdrawalOutcome) -> Money {
    for &account in order {
        if !remaining.is_positive() {
            break;
        }
        remaining -= take(account, remaining, outcome);
    }
    remaining
}

fn take(account: AccountKind, wanted: Money, outcome: &mut WithdrawalOutcome) -> Money {
    let balance = outcome.balances.get_mut(account);
    let taken = wanted.non_negative().min(balance.non_negative());
    *balance -= taken;
    *outcome.amounts.get_mut(account) += taken;
    taken
}
