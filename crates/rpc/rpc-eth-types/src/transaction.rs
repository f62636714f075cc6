//! Resolution of partially specified transaction requests.

use crate::{
    error::{EthApiError, EthResult, RpcInvalidTransactionError},
    provider::{ChainAccessor, GasEstimator},
    EthConfig,
};
use blade_primitives::{Hardfork, Header, U256};
use blade_rpc_types::{CallMsg, TransactionRequest};
use tracing::{debug, trace};

/// Parses a transaction request as sent by an RPC client.
pub fn parse_request(bytes: &[u8]) -> EthResult<TransactionRequest> {
    serde_json::from_slice(bytes).map_err(|err| EthApiError::InvalidParams(err.to_string()))
}

/// Fills in the unset fields of transaction requests.
///
/// Resolution consults the chain state for fee defaults and the sender nonce, and the gas
/// estimator for a missing gas limit. A request is either fully resolved or left untouched.
#[derive(Debug, Clone)]
pub struct TransactionResolver<Chain, Estimator> {
    chain: Chain,
    estimator: Estimator,
    config: EthConfig,
}

// === impl TransactionResolver ===

impl<Chain, Estimator> TransactionResolver<Chain, Estimator> {
    /// Creates a new resolver.
    pub const fn new(chain: Chain, estimator: Estimator, config: EthConfig) -> Self {
        Self { chain, estimator, config }
    }

    /// Returns the chain state accessor.
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &EthConfig {
        &self.config
    }
}

impl<Chain, Estimator> TransactionResolver<Chain, Estimator>
where
    Chain: ChainAccessor,
    Estimator: GasEstimator,
{
    /// Resolves every unset field of `request`.
    ///
    /// Fees are resolved first, then the nonce, the gas limit and the chain id. On error
    /// `request` is left as it was.
    pub fn resolve(&self, request: &mut TransactionRequest) -> EthResult<()> {
        self.apply(request, |request| {
            self.fill_fees(request)?;
            self.fill_nonce(request);
            self.fill_gas(request)?;
            self.fill_chain_id(request)
        })
    }

    /// Resolves only the fee fields of `request`, see [`Self::resolve`].
    ///
    /// A fully specified fee market request is validated and typed as a dynamic fee
    /// transaction. A legacy gas price is validated and kept. Otherwise defaults are filled in
    /// depending on whether the London fork is active at the current head.
    pub fn resolve_fees(&self, request: &mut TransactionRequest) -> EthResult<()> {
        self.apply(request, |request| self.fill_fees(request))
    }

    /// Resolves `request` and converts it into a [`CallMsg`].
    pub fn resolve_call_msg(&self, mut request: TransactionRequest) -> EthResult<CallMsg> {
        self.resolve(&mut request)?;
        request.into_call_msg().ok_or(EthApiError::UnresolvedRequest)
    }

    /// Runs `f` on a copy of `request` and stores the copy only if `f` succeeds.
    fn apply<F>(&self, request: &mut TransactionRequest, f: F) -> EthResult<()>
    where
        F: FnOnce(&mut TransactionRequest) -> EthResult<()>,
    {
        let mut resolved = request.clone();
        if let Err(err) = f(&mut resolved) {
            debug!(target: "rpc::eth", %err, "rejected transaction request");
            return Err(err)
        }
        *request = resolved;
        Ok(())
    }

    fn fill_fees(&self, request: &mut TransactionRequest) -> EthResult<()> {
        if request.gas_price.is_some() && request.has_fee_market_fields() {
            return Err(RpcInvalidTransactionError::ConflictingFeeFieldsInRequest.into())
        }

        // fully specified fee market fields need no defaults, even before London
        if let (Some(max_fee_per_gas), Some(max_priority_fee_per_gas)) =
            (request.max_fee_per_gas, request.max_priority_fee_per_gas)
        {
            if max_fee_per_gas.is_zero() {
                return Err(RpcInvalidTransactionError::ZeroFeeCap.into())
            }
            ensure_tip_below_fee_cap(max_fee_per_gas, max_priority_fee_per_gas)?;
            request.set_dynamic_fee_type();
            return Ok(())
        }

        let head = self.chain.current_header()?;
        let is_london = self.chain.is_fork_active(Hardfork::London, head.number);

        if let Some(gas_price) = request.gas_price {
            if gas_price.is_zero() && is_london {
                return Err(RpcInvalidTransactionError::GasPriceZeroAfterLondon.into())
            }
            return Ok(())
        }

        if is_london {
            return self.fill_london_fees(request, &head)
        }

        if request.has_fee_market_fields() {
            return Err(RpcInvalidTransactionError::FeeMarketFieldsBeforeLondon.into())
        }
        let gas_price = U256::from(self.config.price_limit).max(self.chain.average_gas_price());
        trace!(target: "rpc::eth", %gas_price, "filled legacy gas price");
        request.gas_price = Some(gas_price);
        Ok(())
    }

    fn fill_london_fees(&self, request: &mut TransactionRequest, head: &Header) -> EthResult<()> {
        let max_priority_fee_per_gas = match request.max_priority_fee_per_gas {
            Some(tip) => tip,
            None => self.chain.suggested_priority_fee()?,
        };
        // twice the base fee leaves room for the base fee to rise before inclusion
        let max_fee_per_gas = request.max_fee_per_gas.unwrap_or_else(|| {
            max_priority_fee_per_gas
                .saturating_add(U256::from(head.base_fee_per_gas) * U256::from(2))
        });
        ensure_tip_below_fee_cap(max_fee_per_gas, max_priority_fee_per_gas)?;

        trace!(
            target: "rpc::eth",
            %max_fee_per_gas,
            %max_priority_fee_per_gas,
            base_fee = head.base_fee_per_gas,
            "filled fee market fields"
        );
        request.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        request.max_fee_per_gas = Some(max_fee_per_gas);
        request.set_dynamic_fee_type();
        Ok(())
    }

    fn fill_nonce(&self, request: &mut TransactionRequest) {
        if request.nonce.is_some() {
            return
        }
        let from = request.from.unwrap_or_default();
        let nonce = self.chain.nonce_of(from);
        trace!(target: "rpc::eth", %from, nonce, "filled nonce");
        request.nonce = Some(nonce);
    }

    fn fill_gas(&self, request: &mut TransactionRequest) -> EthResult<()> {
        if request.gas.is_some() {
            return Ok(())
        }
        let call = TransactionRequest {
            from: request.from,
            to: request.to,
            gas_price: request.gas_price,
            max_fee_per_gas: request.max_fee_per_gas,
            max_priority_fee_per_gas: request.max_priority_fee_per_gas,
            value: request.value,
            data: request.calldata().cloned(),
            ..Default::default()
        };
        let estimate = self.estimator.estimate_gas(call)?;
        let gas = u64::try_from(estimate).map_err(|_| EthApiError::InvalidGasEstimate(estimate))?;
        trace!(target: "rpc::eth", gas, "filled estimated gas");
        request.gas = Some(gas);
        Ok(())
    }

    fn fill_chain_id(&self, request: &mut TransactionRequest) -> EthResult<()> {
        let want = self.config.chain_id;
        match request.chain_id {
            Some(have) if have != want => Err(EthApiError::ChainIdMismatch { have, want }),
            Some(_) => Ok(()),
            None => {
                trace!(target: "rpc::eth", chain_id = want, "filled chain id");
                request.chain_id = Some(want);
                Ok(())
            }
        }
    }
}

fn ensure_tip_below_fee_cap(
    max_fee_per_gas: U256,
    max_priority_fee_per_gas: U256,
) -> Result<(), RpcInvalidTransactionError> {
    if max_fee_per_gas < max_priority_fee_per_gas {
        return Err(RpcInvalidTransactionError::TipAboveFeeCap {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }
    Ok(())
}
