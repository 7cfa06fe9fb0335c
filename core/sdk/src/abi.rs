use ethers::prelude::abigen;

abigen!(
    Marketplace,
    r"[
        function itemCount() view returns (uint256)
        function items(uint256) view returns (uint256 id, address nftContract, uint256 tokenId, uint256 price, address owner)
        function collectionCount() view returns (uint256)
        function collections(uint256) view returns (address)
        function addItem(uint256 collectionId, uint256 tokenId)
        function listItem(uint256 itemId, uint256 price)
        function buyItem(uint256 itemId) payable
        function addCollection(address nftCollection)
        function placeOffer(uint256 itemId, uint256 price)
        function getOfferers(uint256 itemId) view returns (address[])
        function offers(uint256, address) view returns (uint256 itemId, uint256 price, address seller, bool isAccepted)
        function acceptOffer(uint256 itemId, address offerer)
        function claimItem(uint256 itemId) payable
        function owner() view returns (address)
        function withdraw()
        event LogCollectionAdded(uint256 id, address nftCollection)
    ]"
);

abigen!(
    NftCollection,
    r"[
        constructor(string name, string symbol)
        function name() view returns (string)
        function symbol() view returns (string)
        function tokenURI(uint256 tokenId) view returns (string)
        function ownerOf(uint256 tokenId) view returns (address)
        function getApproved(uint256 tokenId) view returns (address)
        function approve(address to, uint256 tokenId)
        function mint(string tokenURI) returns (uint256)
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)
    ]"
);
