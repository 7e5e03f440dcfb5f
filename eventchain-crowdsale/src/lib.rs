#![no_std]

multiversx_sc::imports!();

pub mod crowdsale_proxy;
pub mod state;
pub mod token_proxy;

use state::CrowdsaleState;

// ============================================================
// Constants
// ============================================================

/// Exchange rate during Phase 1, in tokens per payment unit
const PHASE1_RATE: u64 = 1140;

/// Exchange rate during Phase 2
const PHASE2_RATE: u64 = 920;

/// Exchange rate during Phase 3
const PHASE3_RATE: u64 = 800;

/// Exchange rate on the single-phase track
const OPEN_RATE: u64 = 800;

/// Rate increment granted for a non-empty note, Crowdsale Open only
const NOTE_BONUS_RATE: u64 = 336;

/// Whole tokens held back from Phase 1 for Phase 2
const PHASE2_RESERVE_TOKENS: u64 = 21_000_000;

/// Whole tokens held back from Phases 1 and 2 for Phase 3
const PHASE3_RESERVE_TOKENS: u64 = 21_000_000;

/// Share of every distribution paid to the second beneficiary
const BENEFICIARY_TWO_CLAIM_PERCENT: u64 = 3;

/// Byte ceiling for the note attached to a contribution
const MAX_NOTE_LENGTH: usize = 64;

/// Token decimals, used to scale the phase reserves
const TOKEN_DECIMALS: u32 = 18;

// ============================================================
// Contract
// ============================================================

/// Phased token sale. Contributions mint EventChain tokens through
/// the token ledger at the rate of the active phase; the payments
/// accumulate in this contract and are split 3%/97% between the two
/// beneficiaries every time the owner closes a phase. Each phase
/// sells from a fixed allotment carved out of the token's mintable
/// supply, so the sale can never outrun the supply cap.
#[multiversx_sc::contract]
pub trait EventChainCrowdsale {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        token_address: ManagedAddress,
        beneficiary: ManagedAddress,
        beneficiary_two: ManagedAddress,
    ) {
        require!(!token_address.is_zero(), "Token address is required");
        require!(!beneficiary.is_zero(), "Beneficiary address is required");
        require!(
            !beneficiary_two.is_zero(),
            "Beneficiary two address is required"
        );

        self.token_address().set(&token_address);
        self.beneficiary().set(&beneficiary);
        self.beneficiary_two().set(&beneficiary_two);

        self.current_state().set(CrowdsaleState::Ready);
        self.current_rate().set(0u64);
        self.current_total_supply().set(BigUint::zero());
        self.current_supply().set(BigUint::zero());
        self.total_raised().set(BigUint::zero());
        self.halted().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Public payable entry point. Mints tokens to the payer at
    // the active phase rate; the payment stays in the contract
    // until the next phase transition distributes it.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self, note: OptionalValue<ManagedBuffer>) {
        require!(!self.halted().get(), "Crowdsale is halted");

        let state = self.current_state().get();
        require!(state.is_active(), "Crowdsale is not accepting contributions");

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Contribution must be more than zero");

        let note = note.into_option().unwrap_or_default();
        require!(note.len() <= MAX_NOTE_LENGTH, "Attached note is too large");

        // Note bonus is an Open-track incentive only; the named
        // phases always sell at their fixed rate.
        let mut rate = self.current_rate().get();
        if state == CrowdsaleState::CrowdsaleOpen && !note.is_empty() {
            rate += NOTE_BONUS_RATE;
        }

        let tokens = &payment * rate;
        require!(
            tokens <= self.current_supply().get(),
            "Not enough tokens left in the current phase"
        );

        // The phase allotment is a derived view of the ledger's
        // mintable remainder. If the two ever drift apart the
        // contribution must fail before any state is touched.
        require!(
            tokens <= self.query_mintable_supply(),
            "Token mint would exceed the mintable supply"
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&self.token_address().get())
            .typed(token_proxy::EventChainTokenProxy)
            .mint(caller.clone(), tokens.clone())
            .sync_call();

        self.current_supply().update(|supply| *supply -= &tokens);
        self.total_raised().update(|raised| *raised += &payment);

        self.investment_made_event(
            &caller,
            &payment,
            &tokens,
            ManagedBuffer::from(state.label()),
            &note,
        );
    }

    // ========================================================
    // ENDPOINT: openCrowdsale
    // Single-phase track. The whole mintable remainder goes on
    // sale at once.
    // ========================================================

    #[only_owner]
    #[endpoint(openCrowdsale)]
    fn open_crowdsale(&self) {
        require!(
            self.current_state().get() == CrowdsaleState::Ready,
            "Invalid state transition"
        );

        let allotment = self.query_mintable_supply();
        self.advance_state(CrowdsaleState::CrowdsaleOpen, OPEN_RATE, allotment);
    }

    // ========================================================
    // ENDPOINT: startPhase1
    // Three-phase track. The reserves of the later phases are
    // carved out up front so the more generous Phase 1 rate
    // cannot eat into them.
    // ========================================================

    #[only_owner]
    #[endpoint(startPhase1)]
    fn start_phase1(&self) {
        require!(
            self.current_state().get() == CrowdsaleState::Ready,
            "Invalid state transition"
        );

        let mintable = self.query_mintable_supply();
        let reserves = self.phase_reserve(PHASE2_RESERVE_TOKENS)
            + self.phase_reserve(PHASE3_RESERVE_TOKENS);
        require!(
            mintable >= reserves,
            "Mintable supply cannot cover the phase reserves"
        );

        self.advance_state(CrowdsaleState::Phase1, PHASE1_RATE, mintable - reserves);
    }

    // ========================================================
    // ENDPOINT: startPhase2
    // ========================================================

    #[only_owner]
    #[endpoint(startPhase2)]
    fn start_phase2(&self) {
        require!(
            self.current_state().get() == CrowdsaleState::Phase1,
            "Invalid state transition"
        );

        let allotment = self.current_supply().get() + self.phase_reserve(PHASE2_RESERVE_TOKENS);
        self.advance_state(CrowdsaleState::Phase2, PHASE2_RATE, allotment);
    }

    // ========================================================
    // ENDPOINT: startPhase3
    // ========================================================

    #[only_owner]
    #[endpoint(startPhase3)]
    fn start_phase3(&self) {
        require!(
            self.current_state().get() == CrowdsaleState::Phase2,
            "Invalid state transition"
        );

        let allotment = self.current_supply().get() + self.phase_reserve(PHASE3_RESERVE_TOKENS);
        self.advance_state(CrowdsaleState::Phase3, PHASE3_RATE, allotment);
    }

    // ========================================================
    // ENDPOINT: endCrowdsale
    // Terminal for both tracks. Distributes the final phase's
    // funds and zeroes every sale register.
    // ========================================================

    #[only_owner]
    #[endpoint(endCrowdsale)]
    fn end_crowdsale(&self) {
        let state = self.current_state().get();
        require!(
            state == CrowdsaleState::Phase3 || state == CrowdsaleState::CrowdsaleOpen,
            "Invalid state transition"
        );

        self.advance_state(CrowdsaleState::CrowdsaleEnded, 0u64, BigUint::zero());
    }

    // ========================================================
    // ENDPOINT: halt / unhalt
    // Emergency switch. Gates contributions only; transitions
    // and already-held balances are unaffected.
    // ========================================================

    #[only_owner]
    #[endpoint(halt)]
    fn halt(&self) {
        self.halted().set(true);
    }

    #[only_owner]
    #[endpoint(unhalt)]
    fn unhalt(&self) {
        self.halted().set(false);
    }

    // ========================================================
    // INTERNAL: phase transition
    // Claim-then-advance, in one transaction: the closing
    // phase's funds are fully distributed before the new
    // phase's registers are written.
    // ========================================================

    fn advance_state(&self, to: CrowdsaleState, rate: u64, allotment: BigUint) {
        let from = self.current_state().get();
        if from.is_active() {
            self.claim_funds(&from);
        }

        self.current_total_supply().set(&allotment);
        self.current_supply().set(&allotment);
        self.current_rate().set(rate);
        self.current_state().set(to);

        self.state_changed_event(&from, &to);
    }

    // ========================================================
    // INTERNAL: fund distribution
    // Second beneficiary's cut is computed first with truncating
    // division; the first beneficiary takes the exact remainder,
    // so the two claims always sum to the full balance.
    // ========================================================

    fn claim_funds(&self, closing_state: &CrowdsaleState) {
        let funds = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if funds == 0u64 {
            return;
        }

        let beneficiary_two_claim = &funds * BENEFICIARY_TWO_CLAIM_PERCENT / 100u64;
        let beneficiary_claim = &funds - &beneficiary_two_claim;

        let beneficiary_two = self.beneficiary_two().get();
        let beneficiary = self.beneficiary().get();

        self.send().direct_egld(&beneficiary_two, &beneficiary_two_claim);
        self.send().direct_egld(&beneficiary, &beneficiary_claim);

        let label = ManagedBuffer::from(closing_state.label());
        self.funds_claimed_event(&beneficiary_two, &beneficiary_two_claim, label.clone());
        self.funds_claimed_event(&beneficiary, &beneficiary_claim, label);
    }

    // ========================================================
    // INTERNAL: token ledger reads
    // ========================================================

    fn query_mintable_supply(&self) -> BigUint {
        self.tx()
            .to(&self.token_address().get())
            .typed(token_proxy::EventChainTokenProxy)
            .mintable_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn phase_reserve(&self, whole_tokens: u64) -> BigUint {
        BigUint::from(whole_tokens) * BigUint::from(10u64).pow(TOKEN_DECIMALS)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getCrowdsaleStatus)]
    fn get_crowdsale_status(
        &self,
    ) -> MultiValue5<CrowdsaleState, u64, BigUint, BigUint, BigUint> {
        (
            self.current_state().get(),
            self.current_rate().get(),
            self.current_supply().get(),
            self.current_total_supply().get(),
            self.total_raised().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("stateChanged")]
    fn state_changed_event(
        &self,
        #[indexed] from: &CrowdsaleState,
        #[indexed] to: &CrowdsaleState,
    );

    #[event("investmentMade")]
    fn investment_made_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] payment: &BigUint,
        #[indexed] token_amount: &BigUint,
        #[indexed] phase: ManagedBuffer,
        note: &ManagedBuffer,
    );

    #[event("fundsClaimed")]
    fn funds_claimed_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] claim: &BigUint,
        phase: ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators, fixed at construction ──

    #[view(getToken)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBeneficiary)]
    #[storage_mapper("beneficiary")]
    fn beneficiary(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBeneficiaryTwo)]
    #[storage_mapper("beneficiaryTwo")]
    fn beneficiary_two(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Sale state ──

    #[view(currentState)]
    #[storage_mapper("currentState")]
    fn current_state(&self) -> SingleValueMapper<CrowdsaleState>;

    #[view(currentRate)]
    #[storage_mapper("currentRate")]
    fn current_rate(&self) -> SingleValueMapper<u64>;

    /// Allotment assigned to the active phase at its start.
    #[view(currentTotalSupply)]
    #[storage_mapper("currentTotalSupply")]
    fn current_total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Remaining allotment within the active phase.
    #[view(currentSupply)]
    #[storage_mapper("currentSupply")]
    fn current_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(totalRaised)]
    #[storage_mapper("totalRaised")]
    fn total_raised(&self) -> SingleValueMapper<BigUint>;

    #[view(halted)]
    #[storage_mapper("halted")]
    fn halted(&self) -> SingleValueMapper<bool>;
}
