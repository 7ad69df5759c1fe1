//! Contract ABI definitions for UntronCore, MockUSDT and zkSync system contracts

use alloy::primitives::{address, Address};
use alloy::sol;

sol! {
    /// Destination parameters of an order
    #[sol(all_derives)]
    struct Transfer {
        address recipient;
        uint256 chainId;
        uint256 acrossFee;
        bool doSwap;
        address outToken;
        uint256 minOutputPerUSDT;
        bool fixedOutput;
        bytes swapData;
    }

    /// UntronCore external interface
    #[sol(rpc)]
    interface IUntronCore {
        function initialize() external;

        function createOrder(address provider, address receiver, uint256 size, uint256 rate, Transfer calldata transfer) external;
        function changeOrder(bytes32 orderId, Transfer calldata transfer) external;
        function stopOrder(bytes32 orderId) external;
        function fulfill(bytes32[] calldata _orderIds, uint256 total) external;
        function closeOrders(bytes calldata proof, bytes calldata publicValues) external;
        function setProvider(uint256 liquidity, uint256 rate, uint256 minOrderSize, uint256 minDeposit, address[] calldata receivers) external;

        function setZKVariables(address trustedRelayer, address verifier, bytes32 vkey) external;
        function setTransfersVariables(address usdt, address spokePool, address swapper) external;
        function setFeesVariables(uint256 relayerFee, uint256 feePoint) external;
        function setCoreVariables(bytes32 blockId, bytes32 actionChainTip, bytes32 latestExecutedAction, bytes32 stateHash, uint256 maxOrderSize, uint256 requiredCollateral) external;

        function providers(address provider) external view returns (uint256 liquidity, uint256 rate, uint256 minOrderSize, uint256 minDeposit);
        function isReceiverBusy(address receiver) external view returns (bytes32);
        function receiverOwners(address receiver) external view returns (address);
        function orders(bytes32 orderId) external view returns (uint256 timestamp, address creator, address provider, address receiver, uint256 size, uint256 rate, uint256 minDeposit, Transfer transfer);
        function blockId() external view returns (bytes32);
        function actionChainTip() external view returns (bytes32);
        function latestExecutedAction() external view returns (bytes32);
        function stateHash() external view returns (bytes32);
        function maxOrderSize() external view returns (uint256);
        function requiredCollateral() external view returns (uint256);
        function calculateFulfillerTotal(bytes32[] calldata _orderIds) external view returns (uint256 totalExpense, uint256 totalProfit);
    }

    /// Test token used on devnets
    #[sol(rpc)]
    interface IMockUSDT {
        function mint(address to, uint256 amount) external;
        function balanceOf(address account) external view returns (uint256);
    }

    /// zkSync system contract that performs every contract creation
    interface IContractDeployer {
        function create(bytes32 _salt, bytes32 _bytecodeHash, bytes calldata _input) external payable returns (address);
        function create2(bytes32 _salt, bytes32 _bytecodeHash, bytes calldata _input) external payable returns (address);
    }
}

/// zkSync ContractDeployer system contract
pub const CONTRACT_DEPLOYER_ADDRESS: Address = address!("0x0000000000000000000000000000000000008006");

/// Amount minted by `mintMockUSDT`: 1000 tokens at 6 decimals
pub const MOCK_USDT_MINT_AMOUNT: u64 = 1_000_000_000;
