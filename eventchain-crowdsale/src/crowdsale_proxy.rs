use multiversx_sc::proxy_imports::*;

use crate::state::CrowdsaleState;

pub struct EventChainCrowdsaleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for EventChainCrowdsaleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = EventChainCrowdsaleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        EventChainCrowdsaleProxyMethods { wrapped_tx: tx }
    }
}

pub struct EventChainCrowdsaleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> EventChainCrowdsaleProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token_address: Arg0,
        beneficiary: Arg1,
        beneficiary_two: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&token_address)
            .argument(&beneficiary)
            .argument(&beneficiary_two)
            .original_result()
    }
}

impl<Env, From, To, Gas> EventChainCrowdsaleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn contribute<Arg0: ProxyArg<OptionalValue<ManagedBuffer<Env::Api>>>>(
        self,
        note: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("contribute")
            .argument(&note)
            .original_result()
    }

    pub fn open_crowdsale(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("openCrowdsale")
            .original_result()
    }

    pub fn start_phase1(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startPhase1")
            .original_result()
    }

    pub fn start_phase2(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startPhase2")
            .original_result()
    }

    pub fn start_phase3(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startPhase3")
            .original_result()
    }

    pub fn end_crowdsale(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endCrowdsale")
            .original_result()
    }

    pub fn halt(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("halt")
            .original_result()
    }

    pub fn unhalt(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unhalt")
            .original_result()
    }

    pub fn get_crowdsale_status(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue5<CrowdsaleState, u64, BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCrowdsaleStatus")
            .original_result()
    }

    pub fn token_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getToken")
            .original_result()
    }

    pub fn beneficiary(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBeneficiary")
            .original_result()
    }

    pub fn beneficiary_two(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBeneficiaryTwo")
            .original_result()
    }

    pub fn current_state(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CrowdsaleState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentState")
            .original_result()
    }

    pub fn current_rate(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentRate")
            .original_result()
    }

    pub fn current_total_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentTotalSupply")
            .original_result()
    }

    pub fn current_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentSupply")
            .original_result()
    }

    pub fn total_raised(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalRaised")
            .original_result()
    }

    pub fn halted(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("halted")
            .original_result()
    }
}
