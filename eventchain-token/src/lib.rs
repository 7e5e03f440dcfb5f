#![no_std]

multiversx_sc::imports!();

pub mod token_proxy;

// ============================================================
// Constants
// ============================================================

/// Token display name
pub const TOKEN_NAME: &[u8] = b"EventChain";

/// Token ticker
pub const TOKEN_SYMBOL: &[u8] = b"EVC";

/// Number of decimals, same scale as the native payment unit
pub const TOKEN_DECIMALS: u32 = 18;

/// Capped supply: 84 million whole tokens
pub const TOTAL_SUPPLY_TOKENS: u64 = 84_000_000;

// ============================================================
// Contract
// ============================================================

/// Capped-supply fungible token with a mintable remainder and a
/// transfer lock. Tokens are issued through `mint` by authorized
/// mint agents while the lock is active; peer transfers only work
/// after the owner releases the token. The release is one-way.
#[multiversx_sc::contract]
pub trait EventChainToken {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        let total = BigUint::from(TOTAL_SUPPLY_TOKENS) * BigUint::from(10u64).pow(TOKEN_DECIMALS);

        self.total_supply().set(&total);
        self.mintable_supply().set(&total);
        self.released().set(false);

        // The deployer can mint directly until agents are rewired
        self.mint_agents().insert(deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // Issuance by an authorized agent. Exempt from the release
    // lock: minting is issuance, not a peer transfer.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            self.mint_agents().contains(&caller),
            "Caller is not a mint agent"
        );

        let mintable = self.mintable_supply().get();
        require!(amount <= mintable, "Amount exceeds mintable supply");

        self.mintable_supply().set(mintable - &amount);
        self.balances(&to).update(|balance| *balance += &amount);

        self.mint_event(&to, &amount);
    }

    // ========================================================
    // ENDPOINT: setMintAgent
    // Owner-managed agent set. Idempotent in both directions.
    // ========================================================

    #[only_owner]
    #[endpoint(setMintAgent)]
    fn set_mint_agent(&self, agent: ManagedAddress, enabled: bool) {
        if enabled {
            self.mint_agents().insert(agent.clone());
        } else {
            self.mint_agents().swap_remove(&agent);
        }

        self.mint_agent_changed_event(&agent, enabled);
    }

    // ========================================================
    // ENDPOINT: releaseToken
    // One-way unlock of peer transfers. A second call fails
    // explicitly rather than silently succeeding.
    // ========================================================

    #[only_owner]
    #[endpoint(releaseToken)]
    fn release_token(&self) {
        require!(!self.released().get(), "Token already released");

        self.released().set(true);
        self.released_event();
    }

    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        require!(self.released().get(), "Token has not been released yet");

        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: approve
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);

        self.approval_event(&caller, &spender, &amount);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        require!(self.released().get(), "Token has not been released yet");

        let caller = self.blockchain().get_caller();
        let allowance = self.allowances(&from, &caller).get();
        require!(amount <= allowance, "Insufficient allowance");

        self.allowances(&from, &caller).set(allowance - &amount);
        self.move_balance(&from, &to, &amount);
    }

    // ========================================================
    // INTERNAL: balance movement shared by transfer paths
    // ========================================================

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balances(from).get();
        require!(*amount <= from_balance, "Insufficient balance");

        self.balances(from).set(from_balance - amount);
        self.balances(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(name)]
    fn name(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_NAME)
    }

    #[view(symbol)]
    fn symbol(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_SYMBOL)
    }

    #[view(decimals)]
    fn decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }

    #[view(isMintAgent)]
    fn is_mint_agent(&self, address: &ManagedAddress) -> bool {
        self.mint_agents().contains(address)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mintAgentChanged")]
    fn mint_agent_changed_event(&self, #[indexed] agent: &ManagedAddress, enabled: bool);

    #[event("released")]
    fn released_event(&self);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(mintableSupply)]
    #[storage_mapper("mintableSupply")]
    fn mintable_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(released)]
    #[storage_mapper("released")]
    fn released(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("mintAgents")]
    fn mint_agents(&self) -> UnorderedSetMapper<ManagedAddress>;
}
